//! Fixed FAQ catalog and the destructive reset that installs it.

use solarlead_core::{FaqCategory, NewFaq};

use crate::Result;
use crate::traits::{FaqStore, ReplaceSummary};

const GENERAL: &[(&str, &str)] = &[
    (
        "What is PM Surya Ghar Muft Bijli Yojana?",
        "PM Surya Ghar Muft Bijli Yojana is a government scheme launched by Prime Minister \
         Narendra Modi to provide free electricity to households by promoting rooftop solar \
         installation. Under this scheme, subsidies are provided to reduce the cost of solar \
         panels.",
    ),
    (
        "How much subsidy can I get?",
        "The subsidy depends on the capacity of the solar plant. For up to 2kW, you can get \
         ₹30,000 per kW. For additional capacity up to 3kW, the subsidy is ₹18,000 per kW. The \
         maximum subsidy is capped at ₹78,000 for systems of 3kW and above.",
    ),
    (
        "Who is eligible for this scheme?",
        "Any Indian household with a suitable roof for solar installation and a valid \
         electricity connection can apply. The applicant must not have availed any previous \
         solar subsidy.",
    ),
    (
        "How much money can I save?",
        "On average, a 3kW solar system can save you ₹3,000 to ₹4,000 per month on electricity \
         bills. Over 25 years (the lifespan of solar panels), the savings can amount to lakhs of \
         rupees.",
    ),
];

const SUBSIDY: &[(&str, &str)] = &[
    (
        "When will I receive the subsidy amount?",
        "The subsidy is usually credited directly to your bank account within 30 days after the \
         successful commissioning of the solar plant and verification by the DISCOM officials.",
    ),
    (
        "Is the subsidy for commercial buildings too?",
        "No, PM Surya Ghar Muft Bijli Yojana is primarily for residential households. Commercial \
         and industrial sectors have different schemes and incentives.",
    ),
    (
        "What documents are required for subsidy?",
        "You need your electricity bill, Aadhaar card, bank account details, and proof of roof \
         ownership. The vendor (Ayush Solar) will assist you in uploading these documents.",
    ),
];

const TECHNICAL: &[(&str, &str)] = &[
    (
        "How much roof space is required for 3kW?",
        "Approximately 300 square feet of shadow-free roof area is required for a 3kW solar \
         plant. It should ideally face south for maximum generation.",
    ),
    (
        "What happens when the power goes out?",
        "Grid-connected solar systems automatically shut down during a power cut for safety \
         reasons (anti-islanding). If you need power during outages, you need a hybrid system \
         with battery backup.",
    ),
    (
        "Do solar panels work on cloudy days?",
        "Yes, they still generate electricity on cloudy days, but the efficiency might be \
         reduced to 20-30% of full capacity. They do not generate power at night.",
    ),
];

const INSTALLATION: &[(&str, &str)] = &[
    (
        "How long does installation take?",
        "Once the approvals are in place, the physical installation of the solar plant takes \
         only 1-2 days. The entire process including net metering might take 2-4 weeks.",
    ),
    (
        "What is the warranty on the system?",
        "Solar panels typically come with a 25-year performance warranty. Inverters usually have \
         a 5-10 year warranty, and workmanship warranty is provided by the installer.",
    ),
    (
        "Does it require maintenance?",
        "Solar systems require very low maintenance. You just need to clean the panels with \
         water every couple of weeks to remove dust and bird droppings for maximum efficiency.",
    ),
];

/// The catalog installed by [`reset_faqs`], in category order.
pub fn faq_catalog() -> Vec<NewFaq> {
    FaqCategory::ALL
        .into_iter()
        .flat_map(|category| {
            let entries = match category {
                FaqCategory::General => GENERAL,
                FaqCategory::Subsidy => SUBSIDY,
                FaqCategory::Technical => TECHNICAL,
                FaqCategory::Installation => INSTALLATION,
            };
            entries
                .iter()
                .map(move |(q, a)| NewFaq::new(category, *q, *a))
        })
        .collect()
}

/// Replaces every stored FAQ with [`faq_catalog`].
///
/// This is a reset, not a merge: manually added entries are removed.
pub async fn reset_faqs(store: &dyn FaqStore) -> Result<ReplaceSummary> {
    store.replace_faqs(&faq_catalog()).await
}
