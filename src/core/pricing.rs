//! Pricing tiers and the monthly/yearly billing toggle

/// Billing period selected on the pricing toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    /// Yearly billing charges ten months for twelve
    pub const YEARLY_MONTHS_CHARGED: u32 = 10;

    pub fn toggled(self) -> Self {
        match self {
            BillingPeriod::Monthly => BillingPeriod::Yearly,
            BillingPeriod::Yearly => BillingPeriod::Monthly,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "/month",
            BillingPeriod::Yearly => "/year",
        }
    }
}

/// One column of the pricing table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub description: &'static str,
    /// Price in whole dollars per month
    pub monthly_price: u32,
    pub features: &'static [&'static str],
    pub cta_text: &'static str,
    pub cta_href: &'static str,
    pub highlighted: bool,
}

impl PricingTier {
    pub fn price(&self, period: BillingPeriod) -> u32 {
        match period {
            BillingPeriod::Monthly => self.monthly_price,
            BillingPeriod::Yearly => self.monthly_price * BillingPeriod::YEARLY_MONTHS_CHARGED,
        }
    }

    /// Price formatted for display, e.g. `$19`
    pub fn price_label(&self, period: BillingPeriod) -> String {
        format!("${}", self.price(period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRO: PricingTier = PricingTier {
        name: "Pro",
        description: "For growing teams",
        monthly_price: 19,
        features: &["Unlimited market reports"],
        cta_text: "Start trial",
        cta_href: "/signup",
        highlighted: true,
    };

    #[test]
    fn test_monthly_price() {
        assert_eq!(PRO.price(BillingPeriod::Monthly), 19);
        assert_eq!(PRO.price_label(BillingPeriod::Monthly), "$19");
    }

    #[test]
    fn test_yearly_price_is_ten_months() {
        assert_eq!(PRO.price(BillingPeriod::Yearly), 190);
        assert_eq!(PRO.price_label(BillingPeriod::Yearly), "$190");
    }

    #[test]
    fn test_free_tier_stays_free() {
        let free = PricingTier {
            monthly_price: 0,
            ..PRO
        };
        assert_eq!(free.price(BillingPeriod::Yearly), 0);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
        assert_eq!(BillingPeriod::Monthly.toggled(), BillingPeriod::Yearly);
        assert_eq!(BillingPeriod::Yearly.toggled(), BillingPeriod::Monthly);
        assert_eq!(BillingPeriod::Yearly.suffix(), "/year");
    }
}
