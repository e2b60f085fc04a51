pub use error::Error;
mod conf;
mod error;
mod event;
mod feature;
mod log;
mod rest;
mod server;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[actix_web::main]
async fn main() -> Result<()> {
    log::init_logging();
    let conf = conf::Conf::from_env()?;
    server::run(conf).await
}
