// Lease payment lookup inside FinplatDetails
use crate::model::FinanceDetails;
use crate::normalizer::{is_truthy, to_f64};
use serde::Deserialize;
use serde_json::Value;

/// Finance product keys are not stable; any key containing this marker is a lease variant.
pub const LEASE_MARKER: &str = "LEASE";

#[derive(Debug, Default, Deserialize)]
pub struct FinanceCalculation {
    #[serde(default)]
    pub calculated: Option<Calculated>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Calculated {
    #[serde(default)]
    pub outputs: Option<PaymentFigures>,
    #[serde(default)]
    pub inputs: Option<PaymentFigures>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PaymentFigures {
    #[serde(rename = "monthlyPayment", default)]
    pub monthly_payment: Option<Value>,
}

impl PaymentFigures {
    fn truthy_payment(&self) -> Option<&Value> {
        self.monthly_payment.as_ref().filter(|v| is_truthy(v))
    }
}

impl FinanceCalculation {
    /// Outputs win over inputs. A truthy value that is not numeric yields `None`
    /// without consulting inputs.
    pub fn monthly_payment(&self) -> Option<f64> {
        let calc = self.calculated.as_ref()?;
        let outputs = calc.outputs.as_ref().and_then(PaymentFigures::truthy_payment);
        let inputs = || calc.inputs.as_ref().and_then(PaymentFigures::truthy_payment);
        outputs.or_else(inputs).and_then(to_f64)
    }
}

/// First lease-like product, in mapping order, with a usable monthly payment.
pub fn resolve_lease_payment(details: &FinanceDetails) -> Option<f64> {
    details
        .iter()
        .filter(|(key, _)| key.contains(LEASE_MARKER))
        .find_map(|(_, block)| {
            FinanceCalculation::deserialize(block)
                .ok()?
                .monthly_payment()
        })
}
