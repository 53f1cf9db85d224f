use larder_test_utils::prelude::*;

use crate::{data::category::CategoryRepository, model::catalog::CategoryWrite};

mod upsert_many;

fn category_write(id: Option<i32>, name: &str, category_type: &str) -> CategoryWrite {
    CategoryWrite {
        id,
        name: name.to_string(),
        r#type: category_type.to_string(),
    }
}
