use std::process::ExitCode;

use clap::Parser;

use katha::contact_form::ContactForm;
use katha::telemetry::{get_subscriber, init_subscriber};

/// Submit the contact form from the command line.
#[derive(Parser, Debug)]
#[command(name = "send-contact", version)]
struct Args {
    /// Base URL of the site serving `/api/contact`.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    url: String,

    /// Your name.
    #[arg(long)]
    from: String,

    /// Address we can reply to.
    #[arg(long)]
    email: String,

    /// What you would like to tell us.
    #[arg(long)]
    subject: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let subscriber = get_subscriber("send-contact".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber)?;

    let args = Args::parse();

    let mut form = ContactForm::new(&args.url);
    form.from = args.from;
    form.email = args.email;
    form.subject = args.subject;

    let feedback = form.submit().await;
    println!("{}", feedback.message());

    if feedback.is_sent() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
