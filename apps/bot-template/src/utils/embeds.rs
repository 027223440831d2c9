use serenity::all::CreateEmbed;

/// Colors used across all bot embeds.
pub struct Colors;

impl Colors {
    pub const PRIMARY: u32 = 0xBEBEFE;
    pub const SUCCESS: u32 = 0x57F287;
    pub const ERROR: u32 = 0xE02B2B;
}

/// Create a standard embed with the primary color, footer, and timestamp.
pub fn primary_embed() -> CreateEmbed {
    base_embed(Colors::PRIMARY)
}

/// Create a success-themed embed (green).
pub fn success_embed() -> CreateEmbed {
    base_embed(Colors::SUCCESS)
}

/// Create an error-themed embed (red).
pub fn error_embed() -> CreateEmbed {
    base_embed(Colors::ERROR)
}

fn base_embed(color: u32) -> CreateEmbed {
    CreateEmbed::default()
        .color(color)
        .footer(serenity::all::CreateEmbedFooter::new(concat!(
            "bot-template v",
            env!("CARGO_PKG_VERSION")
        )))
        .timestamp(serenity::model::Timestamp::now())
}
