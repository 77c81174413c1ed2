//! `amazin checkout ...`

use clap::Args;

use amazin_core::payment::fields;
use amazin_storefront::Storefront;
use amazin_storefront::ui::CheckoutModal;

use crate::terminal::prompt;

/// Payment details. Missing flags are prompted for.
#[derive(Debug, Args)]
pub struct CheckoutArgs {
    /// Name on card
    #[arg(long)]
    card_name: Option<String>,

    /// Card number (spaces and dashes are fine)
    #[arg(long)]
    card_number: Option<String>,

    /// Expiry date, MM/YY
    #[arg(long)]
    expiry: Option<String>,

    /// Card security code
    #[arg(long)]
    cvv: Option<String>,

    /// Billing address
    #[arg(long)]
    billing_address: Option<String>,
}

impl CheckoutArgs {
    fn entries(self) -> [(&'static str, &'static str, Option<String>); 5] {
        [
            (fields::CARD_NAME, "Name on card", self.card_name),
            (fields::CARD_NUMBER, "Card number", self.card_number),
            (fields::EXPIRY_DATE, "Expiry (MM/YY)", self.expiry),
            (fields::CVV, "CVV", self.cvv),
            (fields::BILLING_ADDRESS, "Billing address", self.billing_address),
        ]
    }
}

/// Fill the checkout form and place the order.
///
/// # Errors
///
/// Returns an error if input cannot be read, a field is blank, or the
/// backend refuses the order.
pub async fn run(
    storefront: &Storefront,
    args: CheckoutArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut modal = CheckoutModal::new();
    storefront.show_checkout_modal(&mut modal);

    for (field, label, value) in args.entries() {
        let raw = match value {
            Some(value) => value,
            None => prompt(label)?,
        };
        modal.input(field, &raw);
    }

    storefront.process_checkout(&mut modal).await?;
    Ok(())
}
