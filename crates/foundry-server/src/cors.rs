use foundry_config::{AnyOrArray, CorsConfig};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build the Tower CORS layer
///
/// The browser client depends on `Access-Control-Allow-Origin: *` on
/// every response, so an absent config means allow-all rather than no
/// layer at all.
pub(crate) fn cors_layer(config: Option<&CorsConfig>) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any());

    let Some(config) = config else {
        return layer.allow_origin(AllowOrigin::any());
    };

    layer = match &config.origins {
        AnyOrArray::Any => layer.allow_origin(AllowOrigin::any()),
        AnyOrArray::List(origins) => {
            let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            layer.allow_origin(origins)
        }
    };

    if let Some(duration) = config.max_age_duration() {
        layer = layer.max_age(duration);
    }

    layer
}
