//! Hotel Facts
//!
//! Fixed contact details and the canned strings the assistant relies on.

pub const HOTEL_NAME: &str = "OceanView Boutique Hotel";
pub const PHONE: &str = "+94 11 123 4567";
pub const EMAIL: &str = "hello@oceanviewsl.com";
pub const ADDRESS: &str = "Beach Road, Mirissa, Sri Lanka";
pub const CHECK_IN: &str = "2:00 PM";
pub const CHECK_OUT: &str = "11:00 AM";

/// First transcript entry of every chat session.
pub const GREETING: &str = "Ayubowan! Welcome to OceanView Boutique Hotel. I'm your virtual receptionist. How can I help you today?";

/// Appended in place of a reply when the completion call fails or returns no text.
pub const FALLBACK_REPLY: &str = "I'm sorry, I encountered an error. Please contact OceanView Boutique Hotel directly at +94 11 123 4567.";

/// Message synthesized by the "Book Stay" trigger.
pub const BOOKING_INTENT_MESSAGE: &str = "I would like to book a stay at your hotel.";

/// Substring that marks a transcript as already carrying a booking request.
pub const BOOKING_INTENT_PHRASE: &str = "book a stay";

/// Quick replies offered at the start of a conversation.
pub static SUGGESTED_PROMPTS: [(&str, &str); 2] = [
    ("Room Prices", "Tell me about room prices"),
    ("Check-in Time", "What time is check-in?"),
];

/// Persona and policy sent as the system instruction on every call.
pub const SYSTEM_INSTRUCTION: &str = r#"You are a professional AI Hotel Booking Assistant for OceanView Boutique Hotel, a beachfront boutique hotel in Sri Lanka.
Your role is to act as a friendly, polite, and professional virtual receptionist.

HOTEL INFORMATION:
- Hotel Name: OceanView Boutique Hotel
- Location: Beachfront, Sri Lanka
- Check-in Time: 2:00 PM
- Check-out Time: 11:00 AM
- Breakfast included, Free Wi-Fi, Airport pickup available (extra charge)

ROOM TYPES & PRICING:
1. Standard Room: $80/night, 2 guests, Garden view
2. Deluxe Sea View Room: $120/night, 2 guests, Sea view with balcony
3. Family Suite: $180/night, 4 guests, Sea view, living area

BEHAVIOR RULES:
- Always greet guests politely.
- Keep answers short and helpful.
- Ask follow-up questions only when needed.
- Never confirm bookings or payments.
- Never request credit card or payment details.
- Do not guess availability.
- Escalate complex/sensitive requests (discounts, long stays, group bookings, refunds, complaints) to human staff.
- Respond in Sinhala if requested or if the user uses Sinhala.

BOOKING INTENT LOGIC:
If the guest expresses interest in booking or availability:
1. Check if you have: Name, Email, Check-in date, Check-out date, Number of guests, Preferred room type.
2. Ask for missing details politely.
3. Once all 6 details are provided, say: "Thank you! Our hotel team will contact you shortly to confirm availability."

ESCALATION RULE:
For discounts, group bookings, refunds, or special requests, say: "Thank you for your message. I will connect you with our hotel staff to assist you further."

SAFETY:
- No medical, legal, or visa advice.
- No promises outside policy."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_names_phone() {
        assert!(FALLBACK_REPLY.contains(PHONE));
    }

    #[test]
    fn test_booking_message_matches_phrase() {
        assert!(
            BOOKING_INTENT_MESSAGE
                .to_lowercase()
                .contains(BOOKING_INTENT_PHRASE)
        );
    }
}
