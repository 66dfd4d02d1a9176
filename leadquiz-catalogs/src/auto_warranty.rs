use leadquiz::{Catalog, CatalogError, Category, Question, QuizOption, TextVariant, VehicleTable};

/// States offered by the location picker. `OT` stands for any other state.
pub const STATES: [&str; 11] = [
    "CA", "TX", "NY", "FL", "IL", "PA", "OH", "GA", "NC", "MI", "OT",
];

const PRELUDE: &str = "Ready to start your journey?\n\n\
    Continue our short quiz to get matched to an Auto Warranty provider that's suited to you.";

const EPILOGUE: &str = "Thanks! We're matching you with an Auto Warranty provider.\n\
    You will receive a copy of your quote via Email.";

const PHONE_DISCLAIMER: &str = "Your privacy is important to us. You direct and authorize \
    Marketing VF Ltd, its subsidiaries, and related brands, (collectively, \"MVF\") to disclose \
    your contact information (including health data, if provided) to up to 4 supplier(s) (or \
    associated parties) of Auto Protection Plans. By providing a wireless or residential phone \
    number on this form, you agree that MVF and these 4 suppliers or associated parties may make \
    telemarketing, other calls, and send text (including automated calls and messages) and OTT \
    messages like WhatsApp about your request and other products/services to you at the number \
    you supplied. These calls and texts may be made using autodialer or prerecorded voice \
    technology. You also agree that all calls to you may be recorded. Standard message and data \
    rates from your mobile network provider may apply. Your consent is not a condition of any \
    purchase. By providing your phone number and completing the form, you are agreeing to MVF's \
    Terms of Use, including understanding that disputes between you and MVF will be arbitrated. \
    You have certain rights in relation to your personal data, see our Privacy Policy for \
    further information.";

/// Thirty model years counting down from 2025, and the make/model table.
pub fn vehicle_table() -> VehicleTable {
    VehicleTable::new()
        .with_year_span(2025, 30)
        .with_make("Acura", ["ILX", "Integra", "MDX", "RDX", "TLX"])
        .with_make("Audi", ["A3", "A4", "A5", "A6", "Q3", "Q5", "Q7", "Q8"])
        .with_make("BMW", ["3 Series", "4 Series", "5 Series", "X3", "X5", "X7"])
        .with_make("Buick", ["Enclave", "Encore", "Envision"])
        .with_make("Cadillac", ["CT4", "CT5", "Escalade", "XT4", "XT5", "XT6"])
        .with_make(
            "Chevrolet",
            [
                "Blazer",
                "Bolt",
                "Camaro",
                "Colorado",
                "Corvette",
                "Equinox",
                "Malibu",
                "Silverado 1500",
                "Suburban",
                "Tahoe",
                "Traverse",
                "Trax",
            ],
        )
        .with_make("Chrysler", ["300", "Pacifica"])
        .with_make("Dodge", ["Challenger", "Charger", "Durango", "Hornet"])
        .with_make(
            "Ford",
            [
                "Bronco",
                "Bronco Sport",
                "Edge",
                "Escape",
                "Expedition",
                "Explorer",
                "F-150",
                "Maverick",
                "Mustang",
                "Ranger",
            ],
        )
        .with_make("GMC", ["Acadia", "Canyon", "Sierra 1500", "Terrain", "Yukon"])
        .with_make(
            "Honda",
            [
                "Accord", "Civic", "CR-V", "HR-V", "Odyssey", "Passport", "Pilot", "Ridgeline",
            ],
        )
        .with_make(
            "Hyundai",
            [
                "Elantra",
                "Kona",
                "Palisade",
                "Santa Cruz",
                "Santa Fe",
                "Sonata",
                "Tucson",
                "Venue",
            ],
        )
        .with_make(
            "Jeep",
            ["Cherokee", "Compass", "Gladiator", "Grand Cherokee", "Wrangler"],
        )
        .with_make(
            "Kia",
            ["Forte", "K5", "Seltos", "Sorento", "Soul", "Sportage", "Telluride"],
        )
        .with_make("Lexus", ["ES", "GX", "IS", "NX", "RX", "UX"])
        .with_make("Lincoln", ["Aviator", "Corsair", "Nautilus", "Navigator"])
        .with_make("Mazda", ["CX-30", "CX-5", "CX-50", "CX-90", "Mazda3"])
        .with_make(
            "Mercedes-Benz",
            ["C-Class", "E-Class", "GLA", "GLB", "GLC", "GLE", "GLS"],
        )
        .with_make(
            "Nissan",
            [
                "Altima",
                "Frontier",
                "Kicks",
                "Murano",
                "Pathfinder",
                "Rogue",
                "Sentra",
                "Titan",
                "Versa",
            ],
        )
        .with_make("Ram", ["1500", "2500", "3500"])
        .with_make(
            "Subaru",
            ["Ascent", "Crosstrek", "Forester", "Impreza", "Legacy", "Outback"],
        )
        .with_make("Tesla", ["Model 3", "Model S", "Model X", "Model Y"])
        .with_make(
            "Toyota",
            [
                "4Runner",
                "Camry",
                "Corolla",
                "Crown",
                "Highlander",
                "Prius",
                "RAV4",
                "Sequoia",
                "Sienna",
                "Tacoma",
                "Tundra",
                "Venza",
            ],
        )
        .with_make("Volkswagen", ["Atlas", "Golf", "Jetta", "Taos", "Tiguan"])
        .with_make("Volvo", ["S60", "XC40", "XC60", "XC90"])
}

/// The extended auto warranty quiz.
pub fn auto_warranty() -> Result<Catalog, CatalogError> {
    let questions = vec![
        Question::vehicle(
            "q1",
            "What is the year, make & model of your vehicle?",
            Category::Vehicle,
            vehicle_table(),
        ),
        Question::single_select(
            "q2",
            "Roughly, how many miles are on the vehicle?",
            Category::Vehicle,
            vec![
                QuizOption::new("lt100", "Less than 100k", "<100k"),
                QuizOption::new("100-140", "100-140k", "100-140k"),
                QuizOption::new("140-200", "140-200k", "140-200k"),
                QuizOption::new("gt200", "More than 200k", ">200k"),
            ],
        ),
        Question::single_select(
            "q3",
            "How soon do you want your new auto warranty?",
            Category::Coverage,
            vec![
                QuizOption::new("asap", "As soon as possible", "asap"),
                QuizOption::new("1-2w", "1-2 weeks", "1-2w"),
                QuizOption::new("3-4w", "3-4 weeks", "3-4w"),
                QuizOption::new("4w+", "4+ weeks", "4w+"),
                QuizOption::new("unsure", "Unsure", "unsure"),
            ],
        ),
        Question::location("q4", "What state do you live in?", Category::Location, STATES)
            .with_sub_text(
                "Your ZIP code ensures quotes are as accurate as possible for your area",
            ),
        Question::text_input(
            "q5",
            "What's your Email Address?",
            Category::Quote,
            TextVariant::Email,
        )
        .with_sub_text(
            "You will receive a copy of your quote via Email. \
             We only pass your Email Address onto your match.",
        )
        .with_placeholder("example@email.com"),
        Question::text_input(
            "q6",
            "What's your Full Name?",
            Category::Quote,
            TextVariant::Name,
        )
        .with_placeholder("John Doe"),
        Question::text_input(
            "q7",
            "What's your Phone Number",
            Category::Quote,
            TextVariant::Phone,
        )
        .with_placeholder("(512) 494-9400")
        .with_disclaimer(PHONE_DISCLAIMER),
    ];

    Ok(Catalog::new(questions)?
        .with_prelude(PRELUDE)
        .with_epilogue(EPILOGUE))
}
