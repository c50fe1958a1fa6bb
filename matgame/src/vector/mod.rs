mod ops;

pub use self::ops::{
    arg_max, arg_min, normalize_by_sum, right_multiply, scalar_product, sum_of_components,
    unity_vector,
};
