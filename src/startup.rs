use std::net::TcpListener;
use std::sync::Arc;

use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::email_client::{EmailClient, EmailProvider};
use crate::routes::{contact, health, ContactMailboxes};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let email_client = EmailClient::new(
            config.email_client.base_url.clone(),
            config.email_client.authorization_token.clone(),
            config.email_client.timeout(),
        )?;
        let mailboxes = ContactMailboxes {
            sender: config.email_client.sender,
            recipient: config.email_client.recipient,
        };

        let address = format!(
            "{}:{}",
            config.application.host, config.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = run(
            listener,
            Arc::new(email_client),
            mailboxes,
            config.application.max_payload_bytes,
        )?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_provider: Arc<dyn EmailProvider>,
    mailboxes: ContactMailboxes,
    max_payload_bytes: usize,
) -> Result<Server, std::io::Error> {
    let email_provider = web::Data::from(email_provider);
    let mailboxes = web::Data::new(mailboxes);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health))
            .route("/api/contact", web::post().to(contact))
            .app_data(email_provider.clone())
            .app_data(mailboxes.clone())
            .app_data(web::PayloadConfig::new(max_payload_bytes))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
