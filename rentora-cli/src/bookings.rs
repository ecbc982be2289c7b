use std::io::Write;

use chrono::Utc;
use rentora_catalog::{BookingDuration, Quote};
use rentora_core::{BookingRequest, CardDetails};
use rentora_shared::Masked;
use serde::Serialize;
use tracing::info;

use crate::cli::{BookArgs, DurationArgs};
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct BookingResponse {
    booking_id: String,
    status: String,
    total: u32,
    currency: String,
}

fn describe(quote: &Quote) -> String {
    match quote.duration {
        BookingDuration::Hourly { hours } => format!("₹{} × {} hours", quote.unit_price, hours),
        BookingDuration::Daily => "Daily rate".to_string(),
    }
}

fn print_quote<W: Write>(out: &mut W, quote: &Quote) -> std::io::Result<()> {
    writeln!(out, "{:<20} ₹{}", describe(quote), quote.subtotal)?;
    writeln!(out, "{:<20} ₹{}", "Service fee", quote.service_fee)?;
    writeln!(out, "{:<20} ₹{}", "Total", quote.total)
}

pub fn quote<W: Write>(
    state: &AppState,
    id: u32,
    duration: &DurationArgs,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let quote = state.checkout.quote(id, duration.duration())?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &quote)?;
        writeln!(out)?;
        return Ok(());
    }

    print_quote(out, &quote)?;
    Ok(())
}

pub async fn book<W: Write>(
    state: &AppState,
    args: BookArgs,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let request = BookingRequest {
        listing_id: args.id,
        date: args.date.unwrap_or_else(|| Utc::now().date_naive()),
        duration: args.duration.duration(),
    };
    let card = CardDetails {
        holder_name: args.name,
        number: Masked(args.card),
        expiry: args.expiry,
        cvv: Masked(args.cvv),
    };

    info!(listing_id = request.listing_id, date = %request.date, "Starting checkout");
    let booking = state.checkout.checkout(&request, &card).await?;

    if json {
        let response = BookingResponse {
            booking_id: booking.id.to_string(),
            status: format!("{:?}", booking.status),
            total: booking.total,
            currency: booking.currency.clone(),
        };
        serde_json::to_writer_pretty(&mut *out, &response)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Reservation confirmed!")?;
    writeln!(out, "Booking {} on {}", booking.id, booking.date)?;
    writeln!(out, "Paid ₹{} (payment {})", booking.total, booking.payment_id.as_deref().unwrap_or("-"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_args(id: u32) -> BookArgs {
        BookArgs {
            id,
            duration: DurationArgs {
                hours: Some(3),
                daily: false,
            },
            date: None,
            name: "Priya Nair".to_string(),
            card: "4242 4242 4242 4242".to_string(),
            expiry: "12/99".to_string(),
            cvv: "123".to_string(),
        }
    }

    #[test]
    fn test_quote_text_breakdown() {
        let state = AppState::in_memory();
        let mut out = Vec::new();
        let duration = DurationArgs {
            hours: Some(3),
            daily: false,
        };

        // Listing 1 is 199/hr: 597 + 60
        quote(&state, 1, &duration, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("₹199 × 3 hours"));
        assert!(text.contains("₹597"));
        assert!(text.contains("₹60"));
        assert!(text.contains("₹657"));
    }

    #[test]
    fn test_quote_breakdown_uses_quoted_rate() {
        let quote = Quote {
            listing_id: 7,
            duration: BookingDuration::Hourly { hours: 2 },
            unit_price: 350,
            subtotal: 700,
            service_fee: 70,
            total: 770,
            currency: "INR".to_string(),
        };
        let mut out = Vec::new();

        print_quote(&mut out, &quote).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("₹350 × 2 hours"));
        assert!(!text.contains("₹0"));
    }

    #[tokio::test]
    async fn test_book_prints_confirmation() {
        let state = AppState::in_memory();
        let mut out = Vec::new();

        book(&state, book_args(1), true, &mut out).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["status"], "Confirmed");
        assert_eq!(json["total"], 657);
        assert_eq!(json["currency"], "INR");
    }

    #[tokio::test]
    async fn test_book_unknown_listing_fails() {
        let state = AppState::in_memory();
        let mut out = Vec::new();
        assert!(book(&state, book_args(4242), false, &mut out).await.is_err());
        assert!(out.is_empty());
    }
}
