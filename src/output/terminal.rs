//! Terminal output.
//!
//! Draws a [`ViewModel`] as colored text: network bits green, host bits blue,
//! split octets yellow, class-identifying bits underlined.

use crate::models::{AddrClass, AddrError, AddressCategory};
use crate::processing::{BitLabel, OctetLabel, Portion, ViewModel};
use colored::{ColoredString, Colorize};
use itertools::Itertools;

/// Shown instead of the address when the input does not parse.
pub const INVALID_ADDRESS_LABEL: &str = "Adresse invalide";

/// Shown for the class tag and status when there is nothing to show.
pub const PLACEHOLDER: &str = "—";

/// Status LED kind, one per family of categories.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Led {
    Private,
    Special,
    Public,
}

impl Led {
    pub fn css_class(self) -> &'static str {
        match self {
            Led::Private => "private",
            Led::Special => "special",
            Led::Public => "public",
        }
    }
}

/// LED kind and short status label for a category.
pub fn status_led(category: AddressCategory) -> (Led, &'static str) {
    if category.is_special() {
        (Led::Special, "Spéciale")
    } else if category == AddressCategory::Private {
        (Led::Private, "Privée (RFC1918)")
    } else {
        (Led::Public, "Publique")
    }
}

/// Detailed label, one per category.
pub fn category_label(category: AddressCategory) -> &'static str {
    match category {
        AddressCategory::Private => "Privée (RFC1918)",
        AddressCategory::SpecialZero => "Zéro (0.0.0.0)",
        AddressCategory::SpecialLoopback => "Loopback (127.0.0.0/8)",
        AddressCategory::SpecialLinkLocal => "Link-local (169.254.0.0/16)",
        AddressCategory::SpecialMulticast => "Multicast (224.0.0.0/4)",
        AddressCategory::SpecialReserved => "Réservé/Recherche (240.0.0.0/4)",
        AddressCategory::Public => "Publique",
    }
}

pub fn class_tag(class: AddrClass) -> String {
    format!("Classe {class}")
}

/// Decimal octet, colored by portion. Mixed octets carry their network share.
fn paint_octet(octet: &OctetLabel) -> String {
    match (octet.portion, octet.mix_percent()) {
        (Portion::Network, _) => octet.value.to_string().green().bold().to_string(),
        (Portion::Mixed, Some(percent)) => format!("{}[{percent}%]", octet.value)
            .yellow()
            .bold()
            .to_string(),
        _ => octet.value.to_string().blue().to_string(),
    }
}

fn paint_bit(bit: &BitLabel, glow: bool) -> ColoredString {
    let digit = bit.value.to_string();
    let painted = if bit.is_network {
        digit.green().bold()
    } else {
        digit.blue()
    };
    if glow {
        painted.underline()
    } else {
        painted
    }
}

/// Four groups of eight bits separated by dots; the first `glow` bits are underlined.
pub fn paint_bit_row(groups: &[[BitLabel; 8]; 4], glow: u8) -> String {
    groups
        .iter()
        .enumerate()
        .map(|(g, group)| {
            group
                .iter()
                .enumerate()
                .map(|(b, bit)| paint_bit(bit, g == 0 && b < glow as usize))
                .join("")
        })
        .join(".")
}

pub fn paint_octets(octets: &[OctetLabel; 4]) -> String {
    octets.iter().map(paint_octet).join(".")
}

/// Full multi-line rendering of a view.
pub fn render_view(view: &ViewModel) -> String {
    let (led, status) = status_led(view.category);
    let led_marker = match led {
        Led::Private => "●".green(),
        Led::Special => "●".yellow(),
        Led::Public => "●".blue(),
    };
    let mode = if view.classless {
        "sans classe"
    } else {
        "par classe"
    };

    let lines = [
        format!(
            "{} ({mode})  {led_marker} {status}",
            class_tag(view.class).bold()
        ),
        format!(
            "  Adresse  : {} {}",
            paint_octets(&view.address_octets),
            view.prefix_length.to_string().bold()
        ),
        format!(
            "  Binaire  : {}",
            paint_bit_row(&view.address_bits, view.glow_bits)
        ),
        format!("  Masque   : {}", paint_octets(&view.mask_octets)),
        format!("  Binaire  : {}", paint_bit_row(&view.mask_bits, 0)),
        format!("  Type     : {}", category_label(view.category)),
    ];
    lines.join("\n")
}

/// Placeholder rendering for an input that does not parse.
pub fn render_invalid(err: &AddrError) -> String {
    log::debug!("render_invalid({err})");
    [
        format!("{PLACEHOLDER}  {PLACEHOLDER}"),
        format!("  Adresse  : {}", INVALID_ADDRESS_LABEL.red().bold()),
    ]
    .join("\n")
}

/// Render either outcome of [`crate::processing::compute_view`].
pub fn render_result(result: &Result<ViewModel, AddrError>) -> String {
    match result {
        Ok(view) => render_view(view),
        Err(err) => render_invalid(err),
    }
}
