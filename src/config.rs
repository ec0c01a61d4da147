// Where a real contact submission would be posted. Nothing is sent yet, the
// simulated relay only logs it.
#[cfg(debug_assertions)]
pub fn get_contact_endpoint() -> &'static str {
    "http://localhost:3001/api/contact"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_contact_endpoint() -> &'static str {
    "/api/contact"  // Production URL
}

/// Delay of the simulated send, in milliseconds.
pub const SIMULATED_SEND_DELAY_MS: u32 = 1500;

/// How long a notification stays on screen before its exit transition.
pub const NOTIFICATION_DISPLAY_MS: u32 = 5000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

/// Height of the fixed navbar; smooth scrolling stops this far above a section.
pub const NAVBAR_OFFSET_PX: i32 = 80;
pub const NAVBAR_SHADOW_THRESHOLD_PX: f64 = 50.0;

pub const COUNTER_STEPS: u32 = 50;
pub const COUNTER_TICK_MS: u32 = 30;

pub const EMERGENCY_PHONE_DISPLAY: &str = "+1 (234) 567-8900";
pub const EMERGENCY_PHONE_HREF: &str = "tel:+12345678900";
