use crate::conf::Conf;
use crate::event::{DataDirResolver, EventRepo};
use crate::{error, log, rest, Result};
use actix_web::middleware::{from_fn, Compress, NormalizePath};
use actix_web::web::{scope, Data, QueryConfig};
use actix_web::{App, HttpServer};
use tracing::info;

pub async fn run(conf: Conf) -> Result<()> {
    // All the worker threads are sharing a single repo
    let repo = Data::new(EventRepo::new(DataDirResolver::new(
        &conf.data_dir,
        &conf.default_events_file,
    )));

    info!(
        port = conf.port,
        data_dir = %conf.data_dir.display(),
        default_events_file = conf.default_events_file.as_str(),
        "Starting server"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(log::handle_request))
            .wrap(NormalizePath::trim())
            .wrap(Compress::default())
            .app_data(repo.clone())
            .app_data(QueryConfig::default().error_handler(error::query_error_handler))
            .service(
                scope("api/events")
                    .service(rest::events::get)
                    .service(rest::events::post),
            )
    })
    .bind(("0.0.0.0", conf.port))?
    .run()
    .await?;

    Ok(())
}
