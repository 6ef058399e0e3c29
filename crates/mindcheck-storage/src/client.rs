use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;

/// Build an S3 client from the default credential chain.
///
/// `endpoint_url` points the client at an S3-compatible server (e.g. MinIO
/// during local development) and switches to path-style addressing.
pub async fn build_client(endpoint_url: Option<&str>) -> Client {
    let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;

    let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
    if let Some(url) = endpoint_url {
        tracing::info!(endpoint = url, "using custom S3 endpoint");
        builder = builder.endpoint_url(url).force_path_style(true);
    }

    Client::from_conf(builder.build())
}
