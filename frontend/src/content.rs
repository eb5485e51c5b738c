// Placeholder marketing copy for the landing page.

pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", anchor: "#home" },
    NavItem { label: "Services", anchor: "#services" },
    NavItem { label: "About", anchor: "#about" },
    NavItem { label: "Contact", anchor: "#contact" },
];

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🌧️",
        title: "Precipitation Forecast",
        description: "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
    },
    Service {
        icon: "☂️",
        title: "Severe Weather Alerts",
        description: "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
    },
    Service {
        icon: "☁️",
        title: "Air Quality Index",
        description: "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "WeatherNow is your go-to source for accurate and up-to-date weather information. Our team of \
     meteorologists and data scientists work tirelessly to provide you with the most reliable forecasts.",
    "With cutting-edge technology and a passion for weather, we're committed to keeping you informed and \
     prepared for whatever Mother Nature has in store.",
];

pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "John Doe",
        text: "WeatherNow has been a game-changer for my outdoor activities!",
    },
    Testimonial {
        name: "Jane Smith",
        text: "I love the accuracy and reliability of WeatherNow's forecasts.",
    },
    Testimonial {
        name: "Mike Johnson",
        text: "The severe weather alerts have kept me and my family safe.",
    },
];

pub struct Package {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

pub const PACKAGES: &[Package] = &[
    Package {
        name: "Basic",
        price: "Free",
        features: &["7-day forecast", "Basic alerts", "Standard updates"],
    },
    Package {
        name: "Pro",
        price: "$4.99/mo",
        features: &["14-day forecast", "Advanced alerts", "Hourly updates", "Ad-free experience"],
    },
    Package {
        name: "Premium",
        price: "$9.99/mo",
        features: &[
            "30-day forecast",
            "Severe weather warnings",
            "Real-time updates",
            "Personal weather assistant",
        ],
    },
];

pub const SOCIAL_ICONS: &[&str] = &["☀️", "🌧️", "💨"];

pub const FOOTER_ADDRESS: &[&str] = &[
    "1234 Weather Lane",
    "Forecast City, FC 12345",
    "contact@weathernow.com",
];
