//! Cupcake row and request body types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Placeholder image URL substituted when a create request omits `image`.
pub const DEFAULT_IMAGE_URL: &str = "https://tinyurl.com/demo-cupcake";

/// One persisted cupcake. Serializes to the wire contract
/// `{id, flavor, size, rating, image}` used by every endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Cupcake {
    pub id: i64,
    pub flavor: String,
    pub size: String,
    pub rating: f64,
    pub image: String,
}

/// Create-request body. `flavor`, `size` and `rating` are required;
/// a missing `image` gets the placeholder URL at deserialization time, so a
/// `NewCupcake` always carries a concrete image.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct NewCupcake {
    pub flavor: String,
    pub size: String,
    pub rating: f64,
    #[serde(default = "default_image")]
    pub image: String,
}

fn default_image() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

/// Partial-update body: any subset of the non-id fields. Unknown keys are
/// rejected at deserialization rather than silently dropped.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CupcakePatch {
    pub flavor: Option<String>,
    pub size: Option<String>,
    pub rating: Option<f64>,
    pub image: Option<String>,
}

impl CupcakePatch {
    /// True when no field is present, i.e. the body was `{}`.
    pub fn is_empty(&self) -> bool {
        self.flavor.is_none() && self.size.is_none() && self.rating.is_none() && self.image.is_none()
    }
}
