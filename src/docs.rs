use utoipa::OpenApi;

use q2bank_models::{CreateAccountRequest, LoginRequest, LoginResponse, MessageResponse, UserType};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::accounts::controller::create_account,
        crate::modules::accounts::controller::login,
    ),
    components(
        schemas(
            CreateAccountRequest,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            UserType,
        )
    ),
    tags(
        (name = "Accounts", description = "Account registration and login")
    ),
    info(
        title = "q2bank account API",
        description = "User registration, credential validation and token issuance",
    )
)]
pub struct ApiDoc;
