pub mod mvi;
pub mod signin;
