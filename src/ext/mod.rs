mod bounded_str_ext;

pub use bounded_str_ext::BoundedStrExt;
