pub mod point;
pub mod provider;
pub mod window;

pub use self::{
    point::PricePoint,
    provider::{DynamicPriceProvider, WholePriceProvider},
    window::PriceWindow,
};
