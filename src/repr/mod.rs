use crate::{flow::*, node::*, ops::*};

mod matrix;

pub use matrix::*;
