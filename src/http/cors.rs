use axum::http::{request::Parts, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::config::CorsConfig;

/// Check `origin` against a single-`*` pattern such as `https://*.vercel.app`.
///
/// The wildcard matches one or more characters other than `/`.
pub fn origin_matches_pattern(origin: &str, pattern: &str) -> bool {
    let Some((prefix, suffix)) = pattern.split_once('*') else {
        return origin == pattern;
    };

    if origin.len() <= prefix.len() + suffix.len()
        || !origin.starts_with(prefix)
        || !origin.ends_with(suffix)
    {
        return false;
    }

    !origin[prefix.len()..origin.len() - suffix.len()].contains('/')
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}

/// Build a CORS layer from config.
///
/// With credentials enabled, `*` methods/headers mirror the request instead
/// of answering `*`, which browsers reject for credentialed requests.
pub fn build_cors_layer(cfg: &CorsConfig) -> CorsLayer {
    let any_origin = is_wildcard(&cfg.allowed_origins);
    let allow_credentials = cfg.allow_credentials && !any_origin;
    if cfg.allow_credentials && any_origin {
        warn!("CORS allowed_origins=['*'] cannot be combined with credentials; credentials disabled");
    }

    let mut layer = CorsLayer::new();

    if any_origin {
        layer = layer.allow_origin(Any);
    } else {
        let exact: Vec<HeaderValue> = cfg
            .allowed_origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();

        if cfg.allowed_origin_patterns.is_empty() {
            if !exact.is_empty() {
                layer = layer.allow_origin(exact);
            }
        } else {
            let patterns = cfg.allowed_origin_patterns.clone();
            layer = layer.allow_origin(AllowOrigin::predicate(
                move |origin: &HeaderValue, _parts: &Parts| {
                    exact.contains(origin)
                        || origin.to_str().is_ok_and(|o| {
                            patterns.iter().any(|p| origin_matches_pattern(o, p))
                        })
                },
            ));
        }
    }

    if is_wildcard(&cfg.allowed_methods) {
        layer = if allow_credentials {
            layer.allow_methods(AllowMethods::mirror_request())
        } else {
            layer.allow_methods(Any)
        };
    } else {
        let methods: Vec<Method> = cfg
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();
        if !methods.is_empty() {
            layer = layer.allow_methods(methods);
        }
    }

    if is_wildcard(&cfg.allowed_headers) {
        layer = if allow_credentials {
            layer.allow_headers(AllowHeaders::mirror_request())
        } else {
            layer.allow_headers(Any)
        };
    } else {
        let headers: Vec<HeaderName> = cfg
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        if !headers.is_empty() {
            layer = layer.allow_headers(headers);
        }
    }

    if allow_credentials {
        layer = layer.allow_credentials(true);
    }

    layer
}
