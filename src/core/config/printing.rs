use crate::core::config::data::Config;

impl Config {
    pub fn print_all(&self) {
        println!("Current configuration:");
        match &self.theme {
            Some(theme) => println!("  theme: {theme}"),
            None => println!("  theme: (unset, dark)"),
        }
        match self.rich_responses() {
            true => println!("  rich-responses: on"),
            false => println!("  rich-responses: off"),
        }
        println!("  toast-ttl: {} ms", self.toast_ttl().as_millis());
        let timing = &self.timing;
        println!("  timing:");
        println!("    welcome-delay: {} ms", timing.welcome_delay_ms);
        println!(
            "    typing-delay: {} ms + up to {} ms",
            timing.typing_base_ms, timing.typing_jitter_ms
        );
        println!("    quick-action-delay: {} ms", timing.quick_action_delay_ms);
    }
}
