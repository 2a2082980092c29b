use std::fmt::Write as _;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::modules::club_orders::core::order::Order;
use crate::modules::club_orders::core::ports::OrderNotifier;

pub const ORDER_SUBJECT: &str = "Neue Vereinsbestellung";
const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub admin_email: String,
}

/// Mails an order summary to the administrator over STARTTLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: SmtpSettings) -> anyhow::Result<Self> {
        let from: Mailbox = settings
            .user
            .parse()
            .with_context(|| format!("smtp user {:?} is not a mailbox", settings.user))?;
        let to: Mailbox = settings
            .admin_email
            .parse()
            .with_context(|| format!("admin_email {:?} is not a mailbox", settings.admin_email))?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
            .port(settings.port)
            .credentials(Credentials::new(settings.user, settings.password))
            .timeout(Some(SMTP_TIMEOUT))
            .build();
        Ok(Self {
            transport,
            from,
            to,
        })
    }
}

#[async_trait]
impl OrderNotifier for SmtpMailer {
    fn channel(&self) -> &'static str {
        "mail"
    }

    async fn notify(&self, order: &Order) -> anyhow::Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(ORDER_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(order_summary(order))?;
        self.transport.send(message).await?;
        Ok(())
    }
}

pub fn order_summary(order: &Order) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "Besteller: {}", order.buyer);
    let _ = writeln!(body, "Zeitpunkt: {}", order.timestamp);
    let _ = writeln!(body, "Bestellnummer: {}", order.id);
    body.push('\n');
    for article in &order.articles {
        let custom = if article.custom { " [individuell]" } else { "" };
        let _ = writeln!(
            body,
            "- {} × {}{} (Größe {}, Farbe {}) – {}",
            article.qty,
            article.item,
            custom,
            article.size,
            article.color_or_default(),
            article.payment.label(),
        );
    }
    let _ = writeln!(body, "\nGesamt: {} Artikel", order.total_quantity());
    body
}
