mod model;
pub use self::model::metric_ids;
pub use self::model::MetricRecord;
pub use self::model::MetricSample;

mod client;
pub use self::client::ApiError;
pub use self::client::Client;

#[cfg(test)]
pub(crate) mod test_data;
