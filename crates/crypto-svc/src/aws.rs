//! AWS SDK client initialisation for KMS.

use aws_config::BehaviorVersion;

/// Initialise the KMS client.
///
/// Credentials and region are resolved once via the standard AWS credential
/// chain. When `endpoint_url` is set (local development against LocalStack or
/// a similar stand-in), the SDK endpoint is overridden; otherwise the default
/// regional endpoint is used.
pub async fn kms_client(endpoint_url: Option<&str>) -> aws_sdk_kms::Client {
    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;

    match endpoint_url {
        Some(url) => aws_sdk_kms::Client::from_conf(
            aws_sdk_kms::config::Builder::from(&config)
                .endpoint_url(url)
                .build(),
        ),
        None => aws_sdk_kms::Client::new(&config),
    }
}
