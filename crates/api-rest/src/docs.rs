//! OpenAPI document for the REST API.

use crate::handlers;
use api_shared::{ErrorRes, HealthRes, MessageRes};
use recipes_core::{Recipe, RecipePayload};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the security scheme declared in the document.
pub const BASIC_AUTH_SCHEME: &str = "BasicAuth";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipes API",
        version = "1.0",
        description = "This is a sample recipes API",
        contact(name = "Terrence NG", email = "kh.terence.ng@gmail.com"),
        license(name = "Apache 2.0", url = "http://www.apache.org/licenses/LICENSE-2.0.html")
    ),
    paths(
        handlers::health,
        handlers::create_recipe,
        handlers::list_recipes,
        handlers::update_recipe,
        handlers::delete_recipe,
        handlers::search_recipes,
    ),
    components(schemas(Recipe, RecipePayload, ErrorRes, MessageRes, HealthRes)),
    modifiers(&TermsOfServiceAddon, &BasicAuthAddon),
    tags((name = "Recipes", description = "Recipe management")),
    external_docs(url = "https://swagger.io/resources/open-api/", description = "OpenAPI")
)]
pub struct ApiDoc;

/// Terms of service of the API. The `info(...)` attribute has no field for it.
pub const TERMS_OF_SERVICE_URL: &str = "http://swagger.io/terms/";

struct TermsOfServiceAddon;

impl Modify for TermsOfServiceAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.terms_of_service = Some(TERMS_OF_SERVICE_URL.to_string());
    }
}

/// Declares HTTP Basic authentication. Requests are not checked against it.
struct BasicAuthAddon;

impl Modify for BasicAuthAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            BASIC_AUTH_SCHEME,
            SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
        );
    }
}
