pub static TEST_USER_NAME: &str = "Test User";
pub static TEST_USER_EMAIL: &str = "test.user@example.com";
pub static TEST_SESSION_TOKEN: &str = "test-session-token";
