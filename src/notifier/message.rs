use crate::model::DealRecord;
use crate::utils::{escape_html, format_payment};

const HEADLINE: &str = "Found the following Model 3 Lease deals:";

#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl EmailMessage {
    /// One summary for the whole batch.
    pub fn from_deals(deals: &[DealRecord]) -> Self {
        let subject = format!("Tesla Alert: {} Lease Deal(s) Found!", deals.len());

        let mut text = format!("{}\n\n", HEADLINE);
        let mut html = format!("<h1>{}</h1><ul>", HEADLINE);

        for deal in deals {
            let lease = format_payment(deal.lease_payment);
            text.push_str(&format!(
                "Year: {}, Lease: ${}/mo, Link: {}\n",
                deal.year, lease, deal.link
            ));
            html.push_str(&format!(
                "<li>Year: {}, Lease: ${}/mo <a href='{}'>Link</a></li>",
                escape_html(&deal.year),
                lease,
                escape_html(&deal.link)
            ));
        }
        html.push_str("</ul>");

        Self { subject, text, html }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DealRecord {
        DealRecord {
            vin: "5YJ3E1EA0".into(),
            year: "2020".into(),
            price: 23000.0,
            lease_payment: 150.0,
            link: crate::utils::order_link("5YJ3E1EA0"),
        }
    }

    #[test]
    fn text_body_lists_each_deal() {
        let email = EmailMessage::from_deals(&[sample()]);

        assert_eq!(email.subject, "Tesla Alert: 1 Lease Deal(s) Found!");
        assert!(email.text.starts_with("Found the following Model 3 Lease deals:\n\n"));
        assert!(email.text.contains("Year: 2020, Lease: $150.0/mo"));
        assert!(email.text.contains(
            "Link: https://www.tesla.com/m3/order/5YJ3E1EA0?titleStatus=USED\n"
        ));
        assert!(email.text.ends_with("titleStatus=USED\n"));
        assert_eq!(email.text.lines().count(), 3);
    }

    #[test]
    fn html_body_is_an_unordered_list() {
        let mut second = sample();
        second.year = "2019".into();
        second.lease_payment = 171.25;

        let email = EmailMessage::from_deals(&[sample(), second]);

        assert_eq!(email.subject, "Tesla Alert: 2 Lease Deal(s) Found!");
        assert!(email.html.starts_with("<h1>Found the following Model 3 Lease deals:</h1><ul>"));
        assert!(email.html.ends_with("</ul>"));
        assert_eq!(email.html.matches("<li>").count(), 2);
        assert!(email.html.contains(
            "<li>Year: 2019, Lease: $171.25/mo <a href='https://www.tesla.com/m3/order/5YJ3E1EA0?titleStatus=USED'>Link</a></li>"
        ));
    }
}
