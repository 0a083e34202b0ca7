use crate::configuration::Settings;
use crate::email_client::EmailClient;
use crate::routes::{ContactRecipient, health_check, send_email};
use actix_web::dev::Server;
use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub const SEND_EMAIL_PATH: &str = "/api/send-email";

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let recipient = config
            .email_client
            .recipient()
            .map_err(anyhow::Error::msg)
            .context("Invalid recipient email address.")?;
        let email_client = config.email_client.client()?;

        let address = format!("{}:{}", config.app.host, config.app.port);
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {address}"))?;
        let port = listener.local_addr()?.port();
        let server = run(listener, email_client, ContactRecipient(recipient))?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Permissive CORS, attached to every response of the contact endpoint.
fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((ACCESS_CONTROL_ALLOW_METHODS, "POST"))
        .add((ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    recipient: ContactRecipient,
) -> Result<Server, anyhow::Error> {
    let email_client = web::Data::new(email_client);
    let recipient = web::Data::new(recipient);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .service(
                web::resource(SEND_EMAIL_PATH)
                    .wrap(cors_headers())
                    .to(send_email),
            )
            .app_data(email_client.clone())
            .app_data(recipient.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
