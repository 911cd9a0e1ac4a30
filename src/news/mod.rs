//! News sources exposed as agent tools
//!
//! - [`city`]: static lookup for one hard-coded city
//! - [`client`]: country and technology headlines from the news API
//! - [`outcome`]: the result shape handed back to the agent host

pub mod article;
pub mod city;
pub mod client;
pub mod countries;
pub mod outcome;

pub use article::Article;
pub use city::{lookup_city_news, CityNews};
pub use client::{HeadlineQuery, NewsApiClient, NewsApiConfig};
pub use countries::{country_code, supported_countries, supported_countries_list};
pub use outcome::{Headlines, Scope, ToolResult};
