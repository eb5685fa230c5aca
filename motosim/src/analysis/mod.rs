pub mod quadrature;
pub mod view;
