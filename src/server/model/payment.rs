//! Payment gateway request and session models.

/// Person paying for a stay, as sent to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payer {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// Request to open a hosted checkout for a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Amount in minor currency units.
    pub amount: i64,
    /// Reservation number, used as the merchant reference.
    pub reference: String,
    pub description: String,
    pub payer: Payer,
}

/// Hosted checkout created by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSession {
    pub token: String,
    pub redirect_url: String,
}
