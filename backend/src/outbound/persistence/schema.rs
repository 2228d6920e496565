//! Diesel table definitions.
//!
//! Kept in step with `backend/migrations` by hand.

diesel::table! {
    /// Visitor registrations and their ticketing order link.
    registrations (id) {
        /// Generated by the database on insert.
        id -> Uuid,
        first_name -> Text,
        last_name -> Text,
        email -> Text,
        phone -> Text,
        /// Identity-service user who submitted the form.
        user_id -> Nullable<Uuid>,
        /// Written once after the provider accepted the order.
        eventbrite_order_id -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}
