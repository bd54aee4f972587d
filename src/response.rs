//! JSON response envelopes shared by the handlers.

use crate::model::Cupcake;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct CupcakeBody {
    pub cupcake: Cupcake,
}

#[derive(Serialize, ToSchema)]
pub struct CupcakeListBody {
    pub cupcakes: Vec<Cupcake>,
}

#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    pub message: &'static str,
}

pub fn one(cupcake: Cupcake) -> CupcakeBody {
    CupcakeBody { cupcake }
}

pub fn many(cupcakes: Vec<Cupcake>) -> CupcakeListBody {
    CupcakeListBody { cupcakes }
}

pub fn message(message: &'static str) -> MessageBody {
    MessageBody { message }
}
