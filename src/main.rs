use hybrid_crud_backend::settings::Settings;
use hybrid_crud_backend::{build_rocket, SetupError};

#[rocket::main]
async fn main() -> Result<(), SetupError> {
    dotenv::dotenv().ok();

    let settings = Settings::new()?;
    build_rocket(settings).launch().await?;

    Ok(())
}
