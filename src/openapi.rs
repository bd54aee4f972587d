//! OpenAPI description of the HTTP surface, served at
//! `/api-docs/openapi.json`.

use crate::error::ErrorBody;
use crate::model::{Cupcake, CupcakePatch, NewCupcake};
use crate::response::{CupcakeBody, CupcakeListBody, MessageBody};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::cupcakes::list,
        crate::handlers::cupcakes::read,
        crate::handlers::cupcakes::create,
        crate::handlers::cupcakes::update,
        crate::handlers::cupcakes::delete,
    ),
    components(schemas(
        Cupcake,
        NewCupcake,
        CupcakePatch,
        CupcakeBody,
        CupcakeListBody,
        MessageBody,
        ErrorBody
    ))
)]
pub struct ApiDoc;
