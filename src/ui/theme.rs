//! Class helpers shared by pages and components. The classes live in
//! `assets/main.css`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Primary,
    Secondary,
    Outline,
    Ghost,
}

// ============================================
// BUTTON STYLES
// ============================================

pub fn button(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "btn btn-primary",
        Variant::Secondary => "btn btn-secondary",
        Variant::Outline => "btn btn-outline",
        Variant::Ghost => "btn btn-ghost",
    }
}

pub fn button_block(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "btn btn-primary btn-block",
        Variant::Secondary => "btn btn-secondary btn-block",
        Variant::Outline => "btn btn-outline btn-block",
        Variant::Ghost => "btn btn-ghost btn-block",
    }
}

pub fn icon_button() -> &'static str {
    "btn btn-secondary btn-icon"
}

// ============================================
// BADGE STYLES
// ============================================

pub fn badge(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => "badge badge-primary",
        Variant::Secondary => "badge badge-secondary",
        Variant::Outline | Variant::Ghost => "badge badge-outline",
    }
}

// ============================================
// INPUT / PANEL STYLES
// ============================================

pub fn input_class() -> &'static str {
    "input"
}

pub fn input_with_icon() -> &'static str {
    "input input-icon"
}

pub fn label_class() -> &'static str {
    "label"
}

pub fn card() -> &'static str {
    "card"
}

pub fn card_dimmed(dimmed: bool) -> &'static str {
    if dimmed {
        "card card-hover card-dimmed"
    } else {
        "card card-hover"
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_muted() -> &'static str {
    "text-muted"
}

pub fn price_text() -> &'static str {
    "price"
}
