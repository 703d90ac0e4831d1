pub const HELLO_MESSAGE: &str = "Hello World!";
pub const FECHCHA_MESSAGE: &str = "This is fechcha route";

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Static greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn hello_handler() -> &'static str {
    HELLO_MESSAGE
}

#[utoipa::path(
    get,
    path = "/fechcha",
    responses(
        (status = 200, description = "Static greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn fechcha_handler() -> &'static str {
    FECHCHA_MESSAGE
}
