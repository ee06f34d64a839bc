pub mod client;
pub mod payload;
pub mod request_builder;
pub mod response_converter;

pub use client::GeminiClient;
pub use request_builder::RequestBuilderImpl;
pub use response_converter::ResponseConverterImpl;
