/// Menu groups the shop organizes its products under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductGroup {
    OfficeMaterials,
    Memo,
    Packaging,
}

impl ProductGroup {
    pub const ALL: [ProductGroup; 3] = [
        ProductGroup::OfficeMaterials,
        ProductGroup::Memo,
        ProductGroup::Packaging,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProductGroup::OfficeMaterials => "Office Materials",
            ProductGroup::Memo => "Memo",
            ProductGroup::Packaging => "Packaging",
        }
    }

    pub fn products(self) -> impl Iterator<Item = Product> {
        Product::ALL.into_iter().filter(move |p| p.group() == self)
    }
}

/// Every product on the shop menu, priced or not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    VisitingCard,
    OffsetMemo,
    CarbonMemo,
    BoxPackaging,
    BagPackaging,
}

impl Product {
    pub const ALL: [Product; 5] = [
        Product::VisitingCard,
        Product::OffsetMemo,
        Product::CarbonMemo,
        Product::BoxPackaging,
        Product::BagPackaging,
    ];

    /// Stable identifier; available products share it with their `pquote` subcommand
    pub fn id(self) -> &'static str {
        match self {
            Product::VisitingCard => "visiting-card",
            Product::OffsetMemo => "offset-memo",
            Product::CarbonMemo => "carbon-memo",
            Product::BoxPackaging => "box-packaging",
            Product::BagPackaging => "bag-packaging",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Product::VisitingCard => "Visiting Card",
            Product::OffsetMemo => "Offset Memo",
            Product::CarbonMemo => "Carbon Memo",
            Product::BoxPackaging => "Box Packaging",
            Product::BagPackaging => "Bag Packaging",
        }
    }

    pub fn group(self) -> ProductGroup {
        match self {
            Product::VisitingCard => ProductGroup::OfficeMaterials,
            Product::OffsetMemo | Product::CarbonMemo => ProductGroup::Memo,
            Product::BoxPackaging | Product::BagPackaging => ProductGroup::Packaging,
        }
    }

    /// Whether a calculator exists for this product
    pub fn is_available(self) -> bool {
        matches!(self, Product::VisitingCard | Product::OffsetMemo)
    }
}
