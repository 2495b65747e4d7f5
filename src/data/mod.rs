//! Central job data for the Amsterdam deployment. Summaries are derived at
//! catalog build time, never authored here.

use rust_decimal_macros::dec;

use crate::models::{Category, Currency, Employment, PayUnit, RawPosting};

/// Raw definitions in display order: curated partner postings first, then
/// externally-linked listings.
pub fn raw_postings() -> Vec<RawPosting> {
    let mut postings = partner_postings();
    postings.extend(external_postings());
    postings
}

fn partner_postings() -> Vec<RawPosting> {
    vec![
        RawPosting {
            slug: "domakin-agent-amsterdam",
            title: "Domakin Student Agent",
            org_name: "Domakin",
            description_html: concat!(
                "<p><strong>Domakin helps students in the Netherlands find housing.</strong> If you want a flexible role that makes a visible impact, and teaches you real communication and sales skills, this is it.</p>",
                "<p>As a <strong>Domakin Agent</strong>, you combine two core missions:</p>",
                "<ul>",
                "<li><strong>Viewing Agent</strong>: attend property viewings on behalf of students who cannot be present, and report back with clear notes and photos.</li>",
                "<li><strong>Property Seeker</strong>: help students find accommodation by sourcing rooms and studios, verifying the details, and guiding them through the process.</li>",
                "</ul>",
                "<h3>What you will do</h3>",
                "<ul>",
                "<li><strong>Remote viewings</strong>: go to properties in your area, take photos, check key points (registration, condition, neighborhood), and send a structured summary to the student.</li>",
                "<li><strong>Property sourcing</strong>: find rooms and apartments, message or call landlords, confirm registration possibility, price, availability, and upload verified options to our system.</li>",
                "<li><strong>Student support</strong>: help students move fast, make informed decisions, and avoid scams.</li>",
                "<li><strong>Sales training</strong>: we train you to confidently pitch our process to landlords and students, including how we handle room listings and successful takeovers.</li>",
                "</ul>",
                "<h3>Time and compensation</h3>",
                "<ul>",
                "<li><strong>Per viewing</strong>: typically <strong>€20 to €40</strong>, and most viewings take <strong>up to 30 minutes</strong> on site (plus travel).</li>",
                "<li><strong>Per room result</strong>: <strong>€200</strong> flat per room listing or match, with opportunities <strong>up to €300</strong> for a successful takeover, depending on the deal.</li>",
                "<li><strong>Flexible schedule</strong>: take tasks when you want, scale up during busy periods.</li>",
                "</ul>",
                "<h3>Who this is for</h3>",
                "<ul>",
                "<li>Proactive and social people who can follow up consistently</li>",
                "<li>Comfortable walking into viewings and asking direct questions</li>",
                "<li>English friendly, international students welcome</li>",
                "</ul>",
                "<p><strong>How to apply:</strong> Send a message via the contact form on our website. Write <strong>“Domakin for the win”</strong> and include your email. We will reach out to schedule a short interview.</p>",
                "<p><strong>Do work that matters.</strong> Every viewing and every verified room can be the difference between a student having a home, or being stuck for months.</p>",
            ),
            employment_type: Employment::PartTime,
            currency: Some(Currency::Eur),
            address_locality: "Amsterdam",
            area: Some("All around the Netherlands"),
            english_friendly: Some(true),
            work_hours: Some("6 to 20 h/week, flexible"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Sales, Category::Fieldwork],
            featured: true,
            // Commission style fields (clearer than hourly for this role)
            per_gig_amount: Some(dec!(30)),
            per_gig_amount_text: Some("€20 to €40 per remote viewing (avg. up to 30 min on site)"),
            per_sale_amount: Some(dec!(200)),
            per_sale_amount_text: Some(
                "€200 per room listing or match, up to €300 for a successful takeover",
            ),
            logo_url: Some("/logos/domakin.png"),
            logo_alt: Some("Domakin logo"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "ib-tutor",
            title: "IB Tutor (Online)",
            org_name: "AcademiaAI",
            description_html: concat!(
                "<p><strong>Earn well per hour</strong> while working flexibly as an IB tutor with AcademiaAI. You can start with as little as <strong>1 hour per week</strong>, or scale up and earn a substantial monthly income.</p>",
                "<br>",
                "<p>At AcademiaAI, you tutor only within your <strong>area of expertise</strong>. For example, an IB graduate who scored a 6 or 7 in Math AA HL and is studying or has completed a related university degree can tutor DP Math, but not DP Biology. This ensures <strong>high-quality lessons</strong>, which our students truly value.</p>",
                "<br>",
                "<p>We hire IB graduate tutors throughout the year. Once accepted, you can start tutoring quickly.</p>",
                "<br>",
                "<p>When you apply please let us know: </p>",
                "<p><strong>City of residence</strong></p>",
                "<p><strong>Country of residence</strong></p>",
                "<p><strong>Did you graduate from IB?</strong></p>",
                "<p><strong>Have you graduated from the International Baccalaureate Diploma Programme (IB DP)?</strong></p>",
                "<p><strong>Current and completed university studies</strong></p>",
                "<br>",
                "<p>Interested? Apply now and start tutoring with AcademiaAI!</p>",
            ),
            base_salary_min: Some(dec!(20)),
            base_salary_max: Some(dec!(40)),
            employment_type: Employment::PartTime,
            duo: Some(true),
            currency: Some(Currency::Eur),
            pay_unit: Some(PayUnit::Hour),
            address_locality: "Amsterdam",
            area: Some("Online tutoring"),
            english_friendly: Some(true),
            work_hours: Some("1–20 h/week"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Tutoring],
            featured: true,
            per_sale_amount_text: Some("High hourly pay depending on subject and experience"),
            logo_url: Some("/logos/academiaAI.png"),
            logo_alt: Some("AcademiaAI logo"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "pepperminds-door-to-door-sales-amsterdam",
            title: "Door-to-Door Sales",
            org_name: "Pepperminds",
            description_html: concat!(
                r#"<p><strong>Earn €150 per shift</strong> as part of <a href="https://www.pepperminds.nl/makeithappen/?mkt=4930&recruitmentsource=Through_pepper" target="_blank" rel="noopener noreferrer">Pepperminds’ door-to-door team</a> in Amsterdam. We mix the <em>personal touch in a digital era</em> with energy, coaching, and paid training so you can grow fast and earn even faster.</p>"#,
                "<ul>",
                "<li><strong> Dutch is not required</strong>, and you can even receive DUO… if you work enough hours of course 😉</li>",
                "<li><strong>The better you are, the more you earn!</strong> You start as a rookie, grow into a promoter, and can become a captain — with performance bonuses reaching up to <strong>€500 a day!</strong></li>",
                "<li><strong>Learn real sales</strong> — your colleagues are students from all kinds of backgrounds, and together you’ll master the most versatile skill out there: sales!</li>",
                "<li><strong>Challenge yourself</strong> — every day is different, full of teamwork, laughter, and growth.</li>",
                "<li><strong>After work culture</strong> — we even have our own bar where the team celebrates wins and unwinds together!</li>",
                "</ul>",
                "<p>Ready to test your limits, make friends, and earn like a pro? <strong>Join the crew and start this week!</strong></p>",
            ),
            base_salary_min: Some(dec!(12)),
            employment_type: Employment::PartTime,
            base_salary_max: Some(dec!(20)),
            duo: Some(true),
            currency: Some(Currency::Eur),
            pay_unit: Some(PayUnit::Hour),
            address_locality: "Amsterdam",
            area: Some("Various districts"),
            english_friendly: Some(false),
            work_hours: Some("10–20 h/week"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Sales, Category::Fieldwork],
            featured: true,
            // unknown numeric commission -> use text fallback
            per_sale_amount_text: Some("150 euros per shift"),
            logo_url: Some("/logos/pepperminds.jpeg"),
            logo_alt: Some("Pepperminds logo"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "pepperminds-door-to-door-sales-amsterdam-nl",
            title: "Door-to-Door Sales",
            org_name: "Pepperminds",
            description_html: concat!(
                r#"<p><strong>Verdien €150 per shift</strong> als onderdeel van het <a href="https://www.pepperminds.nl/makeithappen/?mkt=4930&recruitmentsource=Through_pepper" target="_blank" rel="noopener noreferrer">Pepperminds door-to-door team</a> in Amsterdam. Wij combineren de <em>persoonlijke touch in een digitaal tijdperk</em> met energie, coaching en betaalde trainingen zodat jij snel kunt groeien én snel kunt verdienen.</p>"#,
                "<ul>",
                "<li>, en je kunt zelfs DUO ontvangen als je genoeg uren werkt 😉</li>",
                "<li><strong>Hoe beter je presteert, hoe meer je verdient!</strong> Je start als rookie, groeit door tot promoter en kunt captain worden met bonussen tot <strong>€500 per dag!</strong></li>",
                "<li><strong>Leer echte sales</strong> samen met ambitieuze studenten uit allerlei achtergronden.</li>",
                "<li><strong>Daag jezelf uit</strong> elke werkdag is anders, vol teamwork en groei.</li>",
                "<li><strong>After work cultuur</strong> we hebben zelfs een eigen bar om successen te vieren.</li>",
                "</ul>",
                "<p>Klaar om je grenzen te verleggen, vrienden te maken en goed te verdienen? <strong>Start deze week nog!</strong></p>",
            ),
            base_salary_min: Some(dec!(12)),
            employment_type: Employment::PartTime,
            base_salary_max: Some(dec!(20)),
            duo: Some(true),
            currency: Some(Currency::Eur),
            pay_unit: Some(PayUnit::Hour),
            address_locality: "Amsterdam",
            area: Some("Verschillende wijken"),
            english_friendly: Some(false),
            work_hours: Some("10–20 uur per week"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Sales, Category::Fieldwork],
            featured: false,
            per_sale_amount_text: Some("€150 per shift"),
            logo_url: Some("/logos/pepperminds.jpeg"),
            logo_alt: Some("Pepperminds logo"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "thuisbezorgd-takeaway-courier-netherlands",
            title: "Food Delivery",
            org_name: "Thuisbezorgd.nl",
            description_html: concat!(
                "<p><strong>Are you tired of endless study sessions and sitting behind your laptop all day?</strong> This job is your perfect excuse to get outside, stay active, and earn solid money while exploring your city! Join <strong>Thuisbezorgd.nl</strong> as a Food Delivery Courier — hop on your bike, scooter, or car, and deliver happiness (and food) straight to hungry customers.</p>",
                "<ul>",
                "<li><strong>Flexible schedule</strong> — choose your own working hours so you can balance lectures, gym time, and parties 🍕🚴‍♂️</li>",
                "<li><strong>Reliable income</strong> — hourly pay + tips + bonuses (and yes, rainy-day deliveries pay even better 😉)</li>",
                "<li><strong>DUO-friendly</strong> — work enough hours and you can qualify for <strong>study financing (DUO)</strong> while keeping your freedom!</li>",
                "<li><strong>Requirements</strong> — smartphone with data and your own bike, scooter, or car</li>",
                "<li><strong>Perfect for students</strong> — stay fit, meet people, and make money on your own schedule</li>",
                "</ul>",
                "<p>Ready to swap your desk for the open road? <strong>Join Thuisbezorgd.nl and start earning this week!</strong></p>",
            ),
            employment_type: Employment::PartTime,
            base_salary_min: Some(dec!(12)),
            base_salary_max: Some(dec!(15)),
            duo: Some(true),
            currency: Some(Currency::Eur),
            pay_unit: Some(PayUnit::Hour),
            address_locality: "Amsterdam",
            area: Some("Citywide / Multiple cities"),
            english_friendly: Some(true),
            work_hours: Some("Flexible shifts, 6–30 h/week"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Delivery, Category::Fieldwork],
            featured: true,
            per_sale_amount_text: Some("14 euros per hour"),
            logo_url: Some("/logos/thuisbezorgd.png"),
            logo_alt: Some("Thuisbezorgd.nl logo"),
            external_url: Some("http://short.takeaway.com/nl355999758"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "uber-eats-courier-amsterdam",
            title: "Uber Eats Courier",
            org_name: "Uber",
            description_html: concat!(
                "<p><strong>Earn on your own schedule</strong> delivering with the Uber app in Amsterdam. Be your own boss, choose when you work, and track your earnings in real time.</p>",
                "<p><strong>Limited-time promo:</strong> <strong>Receive an extra €750</strong> after you sign up and complete <strong>50 trips within 90 days</strong>. *Eligibility applies; see additional terms on Uber’s site.</p>",
                "<ul>",
                "<li><strong>Flexible hours</strong> — ride when it suits you (great alongside studies or another job).</li>",
                "<li><strong>Fast onboarding</strong> — easy sign-up and start delivering once you’re approved.</li>",
                "<li><strong>Real-time earnings</strong> — see trip totals live and cash out with available payout options.</li>",
                "<li><strong>Multiple modes</strong> — deliver by bike, scooter, or car (requirements vary by city).</li>",
                "<li><strong>Refer & earn</strong> — invite friends to drive or deliver and earn once they complete trips.</li>",
                "</ul>",
                "<p><strong>Join today</strong> and start delivering in Amsterdam — the city’s always moving.</p>",
            ),
            base_salary_min: Some(dec!(12)),
            employment_type: Employment::PartTime,
            base_salary_max: Some(dec!(25)),
            duo: Some(true),
            currency: Some(Currency::Eur),
            pay_unit: Some(PayUnit::Hour),
            address_locality: "Amsterdam",
            area: Some("Amsterdam & nearby districts"),
            english_friendly: Some(true),
            work_hours: Some("Flexible — you choose"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Delivery],
            featured: false,
            per_sale_amount_text: Some(
                "€750 sign-up reward after 50 trips (within 90 days; terms apply)",
            ),
            logo_url: Some("/logos/uber.png"),
            logo_alt: Some("Uber logo"),
            ..RawPosting::default()
        },
    ]
}

// External listings recruit on their own sites; none are featured.
fn external_postings() -> Vec<RawPosting> {
    vec![
        RawPosting {
            slug: "picnic-delivery-driver-Amsterdam",
            title: "Picnic Delivery Driver (Amsterdam area)",
            org_name: "Picnic",
            description_html: "<p>Deliver groceries from a Picnic hub, tips on top, weekly pay, and flexible scheduling.</p>",
            employment_type: Employment::PartTime,
            base_salary_min: Some(dec!(9.88)),
            base_salary_max: Some(dec!(15.96)),
            currency: Some(Currency::Eur),
            pay_unit: Some(PayUnit::Hour),
            address_locality: "Amsterdam",
            work_hours: Some("16 to 40 h/week"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Delivery],
            external_url: Some("https://jobs.picnic.app/en/vacancies/delivery-driver-nl"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "albert-heijn-medewerker-allround-Amsterdam",
            title: "Albert Heijn Medewerker Allround (Store shifts)",
            org_name: "Albert Heijn",
            description_html: "<p>Allround supermarket role: shelves, self scan area, produce, and service. Varied store shifts and lots of teamwork.</p>",
            employment_type: Employment::PartTime,
            address_locality: "Amsterdam",
            work_hours: Some("Flexible store shifts"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Retail],
            external_url: Some("https://werk.ah.nl/vacature/12051/medewerker-allround-5"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "albert-heijn-stock-associate-Amsterdam",
            title: "Albert Heijn Stock Associate (Amsterdam)",
            org_name: "Albert Heijn",
            description_html: "<p>Stock and shelf replenishment in store. Flexible hours and a classic student friendly retail job.</p>",
            employment_type: Employment::PartTime,
            address_locality: "Amsterdam",
            work_hours: Some("Flexible"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Retail],
            external_url: Some("https://werk.ah.nl/en/vacancy/38370/stock-associate-60"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "primark-verkoopmedewerker-damrak-Amsterdam",
            title: "Primark Verkoopmedewerker (Amsterdam Damrak)",
            org_name: "Primark",
            description_html: "<p>Retail assistant role in the Amsterdam store, customer help, stock, and keeping the shop floor tidy. Part time roles listed on Primark careers.</p>",
            employment_type: Employment::PartTime,
            address_locality: "Amsterdam",
            work_hours: Some("Part time"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Retail],
            external_url: Some(
                "https://careers.primark.com/en/location/amsterdam-jobs/8171/2750405-2749879-2759794/4",
            ),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "decathlon-verkoopmedewerker-Amsterdam",
            title: "Decathlon Verkoopmedewerker (Amsterdam)",
            org_name: "Decathlon",
            description_html: "<p>Help customers with sport advice, keep shelves stocked, support inventory and freight flow. Retail job in Amsterdam.</p>",
            employment_type: Employment::PartTime,
            address_locality: "Amsterdam",
            work_hours: Some("Store shifts, typically evenings and weekends"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Retail],
            external_url: Some(
                "https://www.werkenbijdecathlon.nl/vacatures/verkoopmedewerker-amsterdam-5654553",
            ),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "coffeecompany-barista-amsterdam-oost-Amsterdam",
            title: "Barista Coffeecompany Amsterdam Oost",
            org_name: "Coffeecompany (via Albron)",
            description_html: "<p>Flexible barista job that pairs well with studying. Learn coffee skills and work in a fast paced team.</p>",
            employment_type: Employment::PartTime,
            address_locality: "Amsterdam",
            work_hours: Some("Flexible"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Hospitality],
            external_url: Some(
                "https://www.werkenbijalbron.nl/vacatures/barista-coffeecompany-amsterdam-oost-amsterdam-1129740",
            ),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "bagels-beans-allround-medewerker-Amsterdam",
            title: "Bagels and Beans Allround Medewerker (Amsterdam)",
            org_name: "Bagels and Beans",
            description_html: "<p>Daytime hospitality role: service, prep, coffee, and team support. Multiple Amsterdam locations recruit via the Bagels and Beans job site.</p>",
            employment_type: Employment::PartTime,
            address_locality: "Amsterdam",
            work_hours: Some("Day shifts, usually no late evenings"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Hospitality],
            external_url: Some("https://www.werkenbijbagelsbeans.nl/"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "starbucks-barista-amsterdam-zuid-cs-Amsterdam",
            title: "Barista Starbucks Amsterdam Zuid CS",
            org_name: "SSP (Starbucks store)",
            description_html: "<p>Barista role at a Starbucks location in Amsterdam. Customer focused work, training, and shift flexibility.</p>",
            employment_type: Employment::PartTime,
            base_salary_min: Some(dec!(14.91)),
            currency: Some(Currency::Eur),
            pay_unit: Some(PayUnit::Hour),
            address_locality: "Amsterdam",
            work_hours: Some("Shifts, weekend availability commonly requested"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Hospitality],
            external_url: Some(
                "https://nl.indeed.com/q-barista-starbucks-l-amsterdam-vacatures.html",
            ),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "sales-promotor-rai-Amsterdam",
            title: "Sales Promotor at RAI (Amsterdam)",
            org_name: "YoungCapital (RAI assignment)",
            description_html: "<p>Demonstrate products on the RAI floor and engage visitors. Listed pay is €15 per hour.</p>",
            employment_type: Employment::PartTime,
            base_salary_min: Some(dec!(15.0)),
            currency: Some(Currency::Eur),
            pay_unit: Some(PayUnit::Hour),
            address_locality: "Amsterdam",
            work_hours: Some("32 to 40 h/week"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Sales, Category::Events],
            external_url: Some(
                "https://www.youngcapital.nl/vacatures/5701070-fulltime-sales-promotor-in-amsterdam-15-p-u",
            ),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "johan-cruijff-arena-steward-host-Amsterdam",
            title: "Johan Cruijff ArenA Event Crew (Steward, Host, Bar)",
            org_name: "Randstad (Johan Cruijff ArenA)",
            description_html: "<p>Work matches and concerts as event crew. Typical student setup with a few events per month and short shifts per event.</p>",
            employment_type: Employment::Temporary,
            address_locality: "Amsterdam",
            work_hours: Some("2 to 5 events per month, about 4.5 hours per event"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Events],
            external_url: Some(
                "https://www.randstad.nl/werknemers/vacatures/topwerkgevers/johan-cruijff-arena",
            ),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "pal-voor-de-klas-teaching-assistant-Amsterdam",
            title: "PAL voor de Klas (Teaching Assistant) via UvA and VU",
            org_name: "PAL voor de Klas",
            description_html: "<p>Support teachers at a secondary school: assist in class, help with tutoring and materials. About 8 hours per week, pay mentioned as at least €11 per hour.</p>",
            employment_type: Employment::PartTime,
            base_salary_min: Some(dec!(11.0)),
            currency: Some(Currency::Eur),
            pay_unit: Some(PayUnit::Hour),
            address_locality: "Amsterdam",
            work_hours: Some("About 8 h/week (minimum availability typically 4 h/week)"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Tutoring],
            external_url: Some("https://student.uva.nl/informatie/assisteren-bij-onderwijs"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "rai-flexpool-event-crew-Amsterdam",
            title: "RAI Flexpool (Event crew, hospitality, floor support)",
            org_name: "RAI Amsterdam",
            description_html: "<p>Work flexible event shifts at RAI Amsterdam via their flex routes. Roles vary per event and department.</p>",
            employment_type: Employment::Temporary,
            address_locality: "Amsterdam",
            work_hours: Some("Event based shifts"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Events, Category::Hospitality],
            external_url: Some("https://careers.rai.nl/departments/flex"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "goodnews-barista-staff-Amsterdam",
            title: "Barista / Staff (GoodNews Amsterdam)",
            org_name: "GoodNews",
            description_html: "<p>Barista and shop staff role in Amsterdam. Customer service, coffee prep, opening/closing, and occasional brand activations. English is recommended and pay is listed as €14.71 gross per hour.</p>",
            employment_type: Employment::PartTime,
            base_salary_min: Some(dec!(14.71)),
            base_salary_max: Some(dec!(14.71)),
            currency: Some(Currency::Eur),
            pay_unit: Some(PayUnit::Hour),
            address_locality: "Amsterdam",
            english_friendly: Some(true),
            work_hours: Some("13 to 32.5 h/week (multiple contract options)"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Hospitality],
            external_url: Some(
                "https://careers.goodnewsco.es/jobs/4270410-barista-staff-at-goodnews-amsterdam",
            ),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "social-hub-front-office-host-Amsterdam-west",
            title: "Front Office Host (Amsterdam West)",
            org_name: "The Social Hub",
            description_html: "<p>Guest facing front of house role: welcome, self check-in kiosk help, bookings support, and service in bars and restaurant areas. Fluent English is required.</p>",
            employment_type: Employment::PartTime,
            address_locality: "Amsterdam",
            area: Some("Amsterdam West"),
            english_friendly: Some(true),
            work_hours: Some("Shifts"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Hospitality],
            external_url: Some("https://job-boards.eu.greenhouse.io/thesocialhub/jobs/4728264101"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "meininger-receptionist-Amsterdam-city-west",
            title: "Receptionist (Amsterdam City West)",
            org_name: "MEININGER Hotels",
            description_html: "<p>Hotel reception role in Amsterdam City West. Guest service, check-in/out, and front desk support in an international environment. Listed as NL/EN.</p>",
            employment_type: Employment::PartTime,
            address_locality: "Amsterdam",
            area: Some("City West"),
            english_friendly: Some(true),
            work_hours: Some("Shifts (part time)"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Hospitality],
            external_url: Some(
                "https://www.hotelprofessionals.nl/en/job/receptionist-fmd-amsterdam-173484",
            ),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "holiday-inn-express-fb-attendant-amsterdam-noord-riverside",
            title: "Food and Beverage Attendant (Amsterdam Noord Riverside)",
            org_name: "Holiday Inn Express (Odyssey Hotel Group)",
            description_html: "<p>Food and beverage team role with breakfast, bar, and dinner service support. Good fit for students who like morning shifts and fast paced hospitality.</p>",
            employment_type: Employment::PartTime,
            address_locality: "Amsterdam",
            area: Some("Noord"),
            english_friendly: Some(true),
            work_hours: Some("Morning focused shifts"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Hospitality],
            external_url: Some(
                "https://www.hotelprofessionals.nl/en/job/food-and-beverage-attendant-amsterdam-173854",
            ),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "spirit-receptionist-european-medicines-agency-Amsterdam",
            title: "Receptionist (European Medicines Agency)",
            org_name: "Spirit Hospitality Services",
            description_html: "<p>Receptionist role at the European Medicines Agency in Amsterdam. International environment and fluent English is required.</p>",
            employment_type: Employment::PartTime,
            address_locality: "Amsterdam",
            english_friendly: Some(true),
            work_hours: Some("Part time"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Hospitality],
            external_url: Some(
                "https://www.spirit-hospitality.nl/vacancies/receptionist-at-the-european-medicines-agency/",
            ),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "flagship-host-bartender-canal-cruise-Amsterdam",
            title: "Host and Bartender (Canal Cruise, start March 2026)",
            org_name: "Flagship Amsterdam",
            description_html: "<p>Host and bartender on canal cruises. Weekend availability is the basis, with extra weekday shifts depending on tourism and weather. Good command of English is required and Dutch is a plus.</p>",
            employment_type: Employment::PartTime,
            address_locality: "Amsterdam",
            english_friendly: Some(true),
            work_hours: Some("Mostly weekends, seasonal"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Events, Category::Hospitality],
            external_url: Some(
                "https://werkenbijflagshipamsterdam.recruitee.com/l/en/o/hostbartender-op-rondvaartboot-in-amsterdam-startdatum-maart-2026?lang=en",
            ),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "abike-shop-assistant-sales-tiger-Amsterdam",
            title: "Shop Assistant (Sales, part time)",
            org_name: "A-Bike Rental and Tours",
            description_html: "<p>Bike rental shop assistant role in Amsterdam locations. Customer help, contracts, recommendations, and sales focused support. Fluency in English is listed as required.</p>",
            employment_type: Employment::PartTime,
            address_locality: "Amsterdam",
            english_friendly: Some(true),
            work_hours: Some("8 to 20 h/week"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Retail, Category::Sales],
            external_url: Some("https://a-bike.nl/join-our-team-at-a-bike/"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "abike-bike-mechanic-part-time-Amsterdam",
            title: "Bike Mechanic (part time)",
            org_name: "A-Bike Rental and Tours",
            description_html: "<p>Part time bike mechanic role for rentals and tours. Basic bike repairs and keeping the fleet tour ready. English is listed as required and Dutch is a plus.</p>",
            employment_type: Employment::PartTime,
            address_locality: "Amsterdam",
            english_friendly: Some(true),
            work_hours: Some("8 to 20 h/week"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Retail],
            external_url: Some("https://a-bike.nl/join-our-team-at-a-bike/"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "abike-tour-guide-part-time-Amsterdam",
            title: "Tour Guide (bike tours, part time)",
            org_name: "A-Bike Rental and Tours",
            description_html: "<p>Lead bike tours through Amsterdam landmarks and hidden gems. Outdoor work with tourists and storytelling. Part time options are listed.</p>",
            employment_type: Employment::PartTime,
            address_locality: "Amsterdam",
            english_friendly: Some(true),
            work_hours: Some("8 to 20 h/week"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Events],
            external_url: Some("https://a-bike.nl/join-our-team-at-a-bike/"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "macbike-rental-officer-seasonal-Amsterdam",
            title: "Rental Officer (seasonal, bike rental shops)",
            org_name: "MacBike",
            description_html: "<p>Seasonal shop role helping customers with rentals, safety advice, bike adjustments, and minor repairs. The role asks for excellent English and other languages are a plus.</p>",
            employment_type: Employment::Temporary,
            address_locality: "Amsterdam",
            english_friendly: Some(true),
            work_hours: Some("Seasonal shifts"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Retail, Category::Sales],
            external_url: Some("https://www.macbike.nl/en/about-us/vacature-verhuurder-en/"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "360amsterdamtours-tour-guide-freelance-Amsterdam",
            title: "Tour Guide (freelance)",
            org_name: "360 Amsterdam Tours",
            description_html: "<p>Outdoor tour guide role for visitors in Amsterdam. The listing mentions €30 to €40 per hour freelance and requires a valid work permit plus KvK registration.</p>",
            employment_type: Employment::Temporary,
            base_salary_min: Some(dec!(30)),
            base_salary_max: Some(dec!(40)),
            currency: Some(Currency::Eur),
            pay_unit: Some(PayUnit::Hour),
            address_locality: "Amsterdam",
            english_friendly: Some(true),
            work_hours: Some("Flexible (freelance)"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Events],
            external_url: Some("https://360amsterdamtours.com/jobs/"),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "heineken-experience-retail-internship-Amsterdam",
            title: "Retail Internship (Heineken Experience Flagship Store)",
            org_name: "HEINEKEN",
            description_html: "<p>Full time retail internship based in Amsterdam with a listed monthly allowance of €650 gross (40 hours). Starting in March, duration 6 months.</p>",
            employment_type: Employment::Temporary,
            base_salary_min: Some(dec!(650)),
            currency: Some(Currency::Eur),
            pay_unit: Some(PayUnit::Month),
            address_locality: "Amsterdam",
            english_friendly: Some(true),
            work_hours: Some("40 h/week (internship)"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Retail],
            external_url: Some(
                "https://careers.theheinekencompany.com/TheNetherlands/job/Amsterdam-Internship-Retail-Heineken-Experience-Flagship-Store/1288588101/",
            ),
            ..RawPosting::default()
        },
        RawPosting {
            slug: "redbull-student-marketeer-Amsterdam",
            title: "Student Marketeer (Amsterdam)",
            org_name: "Red Bull",
            description_html: "<p>Student marketing and brand activation role. Typical student friendly setup tied to campus life and events, listed for Amsterdam.</p>",
            employment_type: Employment::PartTime,
            address_locality: "Amsterdam",
            english_friendly: Some(true),
            work_hours: Some("Part time"),
            date_posted: "2026/02/14",
            valid_through: Some("2026-12-31"),
            categories: vec![Category::Sales, Category::Events],
            external_url: Some(
                "https://nl.linkedin.com/jobs/view/student-marketeer-amsterdam-at-red-bull-4210538771",
            ),
            ..RawPosting::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn bundled_postings_are_complete() {
        let postings = raw_postings();
        assert_eq!(postings.len(), 31);
    }

    #[test]
    fn slugs_are_pairwise_distinct() {
        let postings = raw_postings();
        let slugs: HashSet<&str> = postings.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), postings.len());
    }

    #[test]
    fn every_posting_has_categories() {
        for posting in raw_postings() {
            assert!(!posting.categories.is_empty(), "{} has no categories", posting.slug);
        }
    }

    #[test]
    fn external_postings_all_carry_a_target_url() {
        for posting in external_postings() {
            assert!(posting.external_url.is_some(), "{} has no external url", posting.slug);
            assert!(!posting.featured);
        }
    }
}
