//! `crocco checkout` - validate a checkout form read from JSON.

use std::convert::Infallible;
use std::path::Path;
use std::sync::Arc;

use crocco_storefront::{CheckoutError, CheckoutFields, OrderSubmitter, StorefrontSession};

use super::{CommandError, Context};

/// Accepts every order and logs it.
struct LogSubmitter;

impl OrderSubmitter for LogSubmitter {
    type Receipt = String;
    type Error = Infallible;

    fn submit(&mut self, fields: &CheckoutFields) -> Result<String, Infallible> {
        tracing::info!(
            region = ?fields.region,
            subregion = ?fields.subregion,
            delivery_method = ?fields.delivery_method,
            "Order accepted"
        );
        Ok(format!(
            "Thank you {} {}, your order has been received.",
            fields.first_name.trim(),
            fields.last_name.trim()
        ))
    }
}

/// Enter `input` into a fresh session the way the form would.
///
/// Region and sub-region go through the cascade. A sub-region the cascade
/// rejects is left unset so validation reports it with every other field.
fn fill_session(ctx: &Context, input: CheckoutFields) -> StorefrontSession {
    let mut session = StorefrontSession::new(
        &ctx.config,
        Arc::clone(&ctx.catalog),
        Arc::clone(&ctx.regions),
    );

    if let Some(region) = input.region {
        session.choose_region(region);
    }
    if let Some(subregion) = input.subregion
        && let Err(e) = session.choose_subregion(subregion)
    {
        tracing::warn!(%subregion, error = %e, "Ignoring sub-region selection");
    }

    {
        let mut fields = session.checkout_mut().fields_mut();
        fields.first_name = input.first_name;
        fields.last_name = input.last_name;
        fields.phone_number = input.phone_number;
        fields.delivery_method = input.delivery_method;
        fields.address = input.address;
        fields.notes = input.notes;
    }
    session
}

/// Fill a session's checkout form from `path` and submit it.
pub fn run(ctx: &Context, path: &Path) -> Result<(), CommandError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CommandError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let input: CheckoutFields = serde_json::from_str(&raw)?;
    let mut session = fill_session(ctx, input);

    match session.place_order(&mut LogSubmitter) {
        Ok(receipt) => {
            #[allow(clippy::print_stdout)]
            {
                println!("{receipt}");
            }
            Ok(())
        }
        Err(CheckoutError::Invalid(errors)) => {
            #[allow(clippy::print_stdout)]
            for (field, error) in errors.iter() {
                println!("  {field}: {error}");
            }
            Err(errors.into())
        }
        Err(CheckoutError::Submission(never)) => match never {},
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crocco_core::SubRegionId;
    use crocco_storefront::{CheckoutField, StorefrontConfig, data};

    use super::*;

    fn context() -> Context {
        Context {
            config: StorefrontConfig::default(),
            catalog: Arc::new(data::sample_catalog()),
            regions: Arc::new(data::sample_regions()),
        }
    }

    fn submit(json: &str) -> Result<String, CheckoutError<Infallible>> {
        let input: CheckoutFields = serde_json::from_str(json).unwrap();
        fill_session(&context(), input).place_order(&mut LogSubmitter)
    }

    #[test]
    fn test_subregion_without_region_reported_with_other_fields() {
        let err = submit(r#"{"firstName":"A","lastName":"B","phoneNumber":"1","subregion":1601}"#)
            .unwrap_err();
        let CheckoutError::Invalid(errors) = err else {
            panic!("expected field errors");
        };
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![
                CheckoutField::FirstName,
                CheckoutField::LastName,
                CheckoutField::PhoneNumber,
                CheckoutField::Region,
                CheckoutField::Subregion,
                CheckoutField::Address,
            ]
        );
    }

    #[test]
    fn test_subregion_of_other_region_left_unset() {
        let input: CheckoutFields = serde_json::from_str(
            r#"{"firstName":"Nadia","lastName":"Khelifi","phoneNumber":"0661000000",
                "region":16,"subregion":3101,"deliveryMethod":"office"}"#,
        )
        .unwrap();
        let mut session = fill_session(&context(), input);
        assert_eq!(session.checkout().fields().subregion, None);

        let err = session.place_order(&mut LogSubmitter).unwrap_err();
        let CheckoutError::Invalid(errors) = err else {
            panic!("expected field errors");
        };
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![CheckoutField::Subregion]
        );
    }

    #[test]
    fn test_valid_file_is_accepted() {
        let receipt = submit(
            r#"{"firstName":"Nadia","lastName":"Khelifi","phoneNumber":"0661000000",
                "region":31,"subregion":3101,"deliveryMethod":"office"}"#,
        )
        .unwrap();
        assert_eq!(receipt, "Thank you Nadia Khelifi, your order has been received.");
    }

    #[test]
    fn test_subregion_kept_when_valid() {
        let input: CheckoutFields =
            serde_json::from_str(r#"{"region":16,"subregion":1602}"#).unwrap();
        let session = fill_session(&context(), input);
        assert_eq!(session.checkout().fields().subregion, Some(SubRegionId::new(1602)));
    }
}
