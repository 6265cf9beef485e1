use std::process::ExitCode;

use clap::Parser;
use log::debug;
use signurl::google::{
    expiration_from_secs, signer_with, RequestSigner, SignedUrl, SigningRequest, UrlStyle,
    DEFAULT_DOMAIN,
};
use signurl::time::TimestampContext;
use signurl::{Error, ErrorKind, Result};

#[derive(Debug, Parser)]
#[command(name = "signurl")]
#[command(bin_name = "signurl")]
#[command(version, about = "Generate a signed url for a cloud storage object", long_about = None)]
struct Args {
    /// HTTP method the url grants, e.g. GET or PUT.
    request_method: String,

    /// Region the signature is scoped to, e.g. us-east1 or auto.
    region: String,

    bucket_name: String,

    /// Object name, unescaped.
    object_name: String,

    /// Lifetime of the url in seconds, at most 604800 (7 days).
    #[arg(allow_negative_numbers = true)]
    expiration: i64,

    /// Extra query parameter to sign, as KEY=VALUE.
    #[arg(long = "query", value_name = "KEY=VALUE")]
    query: Vec<String>,

    /// Header the client must send, as NAME:VALUE.
    #[arg(long = "header", value_name = "NAME:VALUE")]
    header: Vec<String>,

    /// Put the bucket in the path instead of the host.
    #[arg(long)]
    path_style: bool,

    #[arg(long, default_value = DEFAULT_DOMAIN)]
    domain: String,

    /// Sign at this RFC3339 instant instead of now.
    #[arg(long, value_name = "RFC3339")]
    timestamp: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    debug!("parsed args: {args:?}");

    match run(args).await {
        Ok(url) => {
            println!("{url}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.kind() {
                ErrorKind::InvalidExpiration => eprintln!("{err}"),
                kind => eprintln!("{kind}: {}", report(&err)),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<SignedUrl> {
    let expires_in = expiration_from_secs(args.expiration)?;
    let req = build_request(&args, expires_in)?;

    let timestamp = match &args.timestamp {
        Some(v) => TimestampContext::parse_rfc3339(v)?,
        None => TimestampContext::now(),
    };

    let mut builder = RequestSigner::new().with_domain(args.domain);
    if args.path_style {
        builder = builder.with_url_style(UrlStyle::PathStyle);
    }

    signer_with(builder).sign_at(&req, &timestamp).await
}

fn build_request(args: &Args, expires_in: std::time::Duration) -> Result<SigningRequest> {
    let mut req = SigningRequest::new(
        &args.request_method,
        &args.region,
        &args.bucket_name,
        &args.object_name,
        expires_in,
    );
    for v in &args.query {
        let (k, v) = parse_pair(v, '=')?;
        req = req.with_query(k, v);
    }
    for v in &args.header {
        let (k, v) = parse_pair(v, ':')?;
        req = req.with_header(k, v);
    }
    Ok(req)
}

/// Render an error followed by its causes, e.g. the json error behind a broken key file.
fn report(err: &Error) -> String {
    let mut out = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

/// Split `KEY{sep}VALUE` at the first separator. The value may be empty, the key may not.
fn parse_pair(input: &str, sep: char) -> Result<(String, String)> {
    match input.split_once(sep) {
        Some((k, v)) if !k.trim().is_empty() => Ok((k.trim().to_string(), v.to_string())),
        _ => Err(Error::config_invalid(format!(
            "expected KEY{sep}VALUE, got {input:?}"
        ))),
    }
}
