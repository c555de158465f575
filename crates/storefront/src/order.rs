//! Order summary formatting and the WhatsApp hand-off link.
//!
//! Checkout does not talk to any backend. The cart is rendered as a chat
//! message and embedded, percent-encoded, in a deep link of the form
//! `https://wa.me/<recipient>?text=<message>`. Opening that link is the job
//! of a [`Handoff`] implementation supplied by the host environment.

use std::fmt::Write as _;

use girlsshop_core::RecipientNumber;
use url::Url;

use crate::cart::{Cart, CartLine};

/// Default messaging deep-link base.
pub const DEFAULT_MESSAGING_URL: &str = "https://wa.me";

/// Errors building a [`MessagingEndpoint`].
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("Invalid messaging URL: {0}")]
    Invalid(#[from] url::ParseError),
    #[error("Messaging URL must use http or https, got {0}")]
    UnsupportedScheme(String),
    #[error("Messaging URL cannot carry a path: {0}")]
    NotABase(String),
}

/// Errors reported by a [`Handoff`].
#[derive(Debug, thiserror::Error)]
#[error("Hand-off failed: {0}")]
pub struct HandoffError(pub String);

/// The external collaborator that opens an order link (a browser tab, the
/// WhatsApp app, a terminal). Delivery is fire-and-forget.
pub trait Handoff {
    /// Open `url` in a new context.
    ///
    /// # Errors
    ///
    /// Returns `HandoffError` if the link could not be handed over at all.
    fn open(&self, url: &Url) -> Result<(), HandoffError>;
}

/// Wording of the order message.
///
/// The defaults are the shop's Spanish greeting and closing; another
/// storefront can change the text without touching the formatting logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTemplate {
    pub greeting: String,
    pub bullet: String,
    pub total_label: String,
    pub closing: String,
}

impl Default for OrderTemplate {
    fn default() -> Self {
        Self {
            greeting: "¡Hola! 🎀 Me gustaría hacer el siguiente pedido:".to_string(),
            bullet: "•".to_string(),
            total_label: "Total:".to_string(),
            closing: "¡Gracias! ✨".to_string(),
        }
    }
}

impl OrderTemplate {
    /// Render the cart as a line-delimited order summary.
    ///
    /// ```text
    /// ¡Hola! 🎀 Me gustaría hacer el siguiente pedido:
    ///
    /// • Lip Matte Miss Bettylip x2 - $9000
    /// • Bálsamo Hidratante (Uva) x1 - $4000
    ///
    /// *Total: $13000*
    ///
    /// ¡Gracias! ✨
    /// ```
    #[must_use]
    pub fn format(&self, cart: &Cart) -> String {
        let mut message = format!("{}\n\n", self.greeting);
        for line in cart.lines() {
            // Writing into a String cannot fail.
            let _ = writeln!(message, "{} {}", self.bullet, describe_line(line));
        }
        let _ = write!(
            message,
            "\n*{} {}*\n\n{}",
            self.total_label,
            cart.total(),
            self.closing
        );
        message
    }
}

/// `name (variant) xQuantity - $subtotal`, the variant part only when set.
#[must_use]
pub fn describe_line(line: &CartLine) -> String {
    match line.variant() {
        Some(variant) => format!(
            "{} ({variant}) x{} - {}",
            line.name(),
            line.quantity(),
            line.subtotal()
        ),
        None => format!("{} x{} - {}", line.name(), line.quantity(), line.subtotal()),
    }
}

/// Render the cart with the default template.
#[must_use]
pub fn format_order(cart: &Cart) -> String {
    OrderTemplate::default().format(cart)
}

/// Validated base URL of the messaging service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingEndpoint(Url);

impl MessagingEndpoint {
    /// Parse and validate a base URL.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError` if the URL is malformed, not http(s), or
    /// cannot have path segments appended.
    pub fn parse(input: &str) -> Result<Self, EndpointError> {
        let url = Url::parse(input.trim())?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(EndpointError::UnsupportedScheme(url.scheme().to_string()));
        }
        if url.cannot_be_a_base() {
            return Err(EndpointError::NotABase(input.to_string()));
        }
        Ok(Self(url))
    }

    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// Deep link sending `message` to `recipient`.
    ///
    /// The message is percent-encoded in full; it is never form-encoded, so
    /// spaces travel as `%20`, not `+`.
    #[must_use]
    pub fn link(&self, recipient: &RecipientNumber, message: &str) -> Url {
        let mut url = self.0.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(recipient.as_str());
        }
        url.set_query(Some(&format!("text={}", urlencoding::encode(message))));
        url
    }
}

impl Default for MessagingEndpoint {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_MESSAGING_URL).expect("default messaging URL is valid"))
    }
}

impl std::fmt::Display for MessagingEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Everything needed to turn a cart into a hand-off link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub endpoint: MessagingEndpoint,
    pub recipient: RecipientNumber,
    pub template: OrderTemplate,
}

impl Checkout {
    /// Default endpoint and wording for `recipient`.
    #[must_use]
    pub fn new(recipient: RecipientNumber) -> Self {
        Self {
            endpoint: MessagingEndpoint::default(),
            recipient,
            template: OrderTemplate::default(),
        }
    }

    /// The order message for `cart`.
    #[must_use]
    pub fn message(&self, cart: &Cart) -> String {
        self.template.format(cart)
    }

    /// The hand-off link for `cart`.
    #[must_use]
    pub fn url(&self, cart: &Cart) -> Url {
        order_url(&self.endpoint, &self.recipient, &self.template, cart)
    }
}

/// Format `cart` with `template` and wrap it in a hand-off link.
#[must_use]
pub fn order_url(
    endpoint: &MessagingEndpoint,
    recipient: &RecipientNumber,
    template: &OrderTemplate,
    cart: &Cart,
) -> Url {
    endpoint.link(recipient, &template.format(cart))
}
