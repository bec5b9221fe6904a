use crate::catalog::ShopItem;
use crate::ledger::Ledger;

use super::ServiceResult;

pub struct SaleService;

impl SaleService {
    /// Records a shop sale and returns the updated running total.
    pub fn record(ledger: &mut Ledger, item: ShopItem) -> f64 {
        let total = ledger.record_sale(item);
        tracing::debug!("Sold {} | shop total ${}", item, total);
        total
    }

    /// Records a sale from the button caption submitted by the shop panel.
    pub fn record_by_label(ledger: &mut Ledger, label: &str) -> ServiceResult<f64> {
        let item = ShopItem::from_label(label)?;
        Ok(Self::record(ledger, item))
    }
}
