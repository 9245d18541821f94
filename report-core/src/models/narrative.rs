//! Default narrative text and fixed links shown in the reports.

pub const DEFAULT_SEASONAL_DESCRIPTION: &str = "This winter started off stronger than we've seen in years, and that lasted to about mid-April. At that point, the market slowed dramatically, which continued into late summer, typically the peak for the year. So in many ways the most important period to push rents higher for the year was a dud in 2025. Then the market began its standard fall season 10% decline from there. So rents are low overall. Some homes do pretty well, and some struggle a lot. It's been difficult to quantify why. Homes that check all the boxes do well but minor issues have turned into thorny problems for many. Because rents are so low this fall has been a bit better than usual. Things almost always pick up a good bit in late October to mid December.

We cover more seasonal market points to know in this article. Rents have dropped considerably, especially in the sunbelt, since early 2023, as shown by these three leading rate-tracking indexes.

We expect all of our markets to hit their long-term bottom this winter.";

pub const DEFAULT_SUMMARY: &str = "Based on our analysis of comparable properties in the area and current market conditions, we recommend listing this property at the starting rate with systematic reductions every 7-10 days until it rents.

The local rental market has been competitive, with most properties in this price range seeing good activity when priced appropriately. Properties that check all the boxes - good condition, updated finishes, desirable location - tend to perform well.

We are confident in our ability to rent this property within the estimated rate range. Our marketing approach includes syndication to 30+ rental listing sites including Zillow (which accounts for 70%+ of rental searches), professional photos, and responsive showing coordination.";

pub const NET_INCOME_EXPLANATION: &str = "Let's consider the annual potential rent picture, or how much cash will the rental produce over the next 12 months.

How much cash can we send you while we manage your important asset? Since 2020 that has averaged 80% of the rent that we collect (including our own cost), and our homes are only vacant 4% of that time. We've achieved these stellar results because we maximize all aspects of the management process, a surprisingly rare approach.";

pub const RATE_ESTIMATE_EXPLANATION: &str = "As the owner you can set the strategy, but if you opt for our recommendation we guarantee we can achieve this rate range, or you can leave with no penalty after allowing us at least 30 days to market at the low range rate. This quote expires after 30 days.

We typically recommend systematically reducing 3% every 7-10 days. This method moves the listing to the top of most searches, emails hundreds of people to let them know, and dramatically boosts traffic in most cases. It's a professional and highly effective method that rarely fails to perfectly balance rate and vacancy. It's also objective and keeps emotion out of the equation.

Most rental markets are fast and efficient these days. If the price is right and we're highly responsive, they rent fast.";

pub const DEFAULT_COVER_LETTER: &str = "We have completed the move-out inspection for your property and wanted to provide a clear summary of where things stand and how we recommend moving forward.

Attached you will find the following:

- A summary of the move-out results and current property condition
- Inspection photos documenting observed issues
- A rough turnover budget outlining what we believe will be needed to return the property to rent-ready condition
- A cash flow report showing performance to date
- An estimated cash flow projection assuming we proceed with this turnover plan

Based on the inspection and our experience with similar properties, the attached budget reflects what we believe is a reasonable and efficient scope of work. Our goal is to complete the turnover quickly, control costs, and position the property to perform well going forward.

Rather than requesting approval for each individual work order, we are asking for approval to complete the necessary repairs within the attached overall budget. If approved, we will manage the work internally and only authorize repairs that fit within this budget.

If at any point we determine the work cannot be completed within the approved amount, we will stop and request further direction before proceeding.

In some cases, once work has started, unforeseen issues can arise. When that happens, any change orders are handled through a formal process. This includes an updated overall budget estimate that can be directly compared to the original, clearly highlighting any changes and their impact before additional work is authorized. We actively work to avoid change orders, but this process ensures transparency if they become necessary.

Please let us know if you approve proceeding with the turnover under the attached budget, or if you would like to discuss any part of the plan in more detail.";

pub const TURNOVER_DISCLAIMER: &str = "Of course this estimate is subject to change. We're considering the information we have in hand now. If we haven't inspected recently we will soon, and will update you if needed. It's imperative to know that we can't account for move out damage, which is actually one of the more common problems. We're focusing on costs you will need to pay at least a portion of (usually split with resident depending on length of term), but omitting those that would be a full deposit charge like junk haul. However those costs come into play if the deposit is depleted.

This projection reflects operating performance based on items we manage and pay on the owner's behalf. It does not include owner-paid expenses such as taxes, insurance, debt service, or other items outside our management scope.";

/// A named external link printed in the report footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpfulLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const VACANCY_CALCULATOR: HelpfulLink = HelpfulLink {
    label: "Rental Vacancy Cost Calculator",
    url: "https://movezen360.com/rental-vacancy-cost-calculator/",
};

pub const CASH_FLOW_CALCULATOR: HelpfulLink = HelpfulLink {
    label: "Rental Investment Cash Flow Calculator",
    url: "https://movezen360.com/rental-investment-cash-flow-calculator/",
};

pub const SEASONAL_ARTICLE: HelpfulLink = HelpfulLink {
    label: "Seasonal Rental Market",
    url: "https://movezen360.com/seasonal-rental-market/",
};

/// Links printed in the rental estimate footer, in order.
pub const REPORT_FOOTER_LINKS: [HelpfulLink; 2] = [VACANCY_CALCULATOR, CASH_FLOW_CALCULATOR];

/// Guarantee paragraph printed as the rental estimate disclaimer.
pub const RATE_GUARANTEE: &str = "As the owner you can set the strategy, but if you opt for our recommendation we guarantee we can achieve this rate range, or you can leave with no penalty after allowing us at least 30 days to market at the low range rate. This quote expires after 30 days.";

pub const REPORT_CLOSING_LINE: &str = "Thanks for considering MoveZen! - MoveZen360.com";
