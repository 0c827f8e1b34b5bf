//! Copy and mock figures shown on the landing page. Everything here is fixed
//! at build time; nothing is fetched or computed.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistic {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeakDataPoint {
    pub month: &'static str,
    pub leaks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavAnchor {
    pub label: &'static str,
    pub href: &'static str,
}

pub static STATS: [Statistic; 4] = [
    Statistic { value: "306", label: "Data Sources" },
    Statistic { value: "150+", label: "Countries" },
    Statistic { value: "250M+", label: "Records" },
    Statistic { value: "1.6M+", label: "Alerts" },
];

// Illustrative only, not real detections.
pub static LEAK_DATA: [LeakDataPoint; 6] = [
    LeakDataPoint { month: "Jan", leaks: 2400 },
    LeakDataPoint { month: "Feb", leaks: 1398 },
    LeakDataPoint { month: "Mar", leaks: 9800 },
    LeakDataPoint { month: "Apr", leaks: 3908 },
    LeakDataPoint { month: "May", leaks: 4800 },
    LeakDataPoint { month: "Jun", leaks: 3800 },
];

pub static TESTIMONIALS: [Testimonial; 2] = [
    Testimonial {
        text: "The platform has revolutionized how we monitor data leaks. It's an invaluable tool for our security team.",
        author: "Sarah Chen",
        role: "CISO, TechCorp",
    },
    Testimonial {
        text: "Comprehensive coverage and real-time alerts have helped us prevent numerous potential data breaches.",
        author: "Michael Rodriguez",
        role: "Security Director, DataSafe",
    },
];

pub static FEATURES: [Feature; 3] = [
    Feature {
        icon: "🔍",
        title: "Dark Web Monitoring",
        body: "Continuous scanning of dark web forums, marketplaces, and channels for leaked data.",
    },
    Feature {
        icon: "🗄️",
        title: "Data Analysis",
        body: "Advanced analytics to identify patterns and predict potential data breaches.",
    },
    Feature {
        icon: "⚠️",
        title: "Real-time Alerts",
        body: "Instant notifications when your sensitive data appears in leaked databases.",
    },
];

pub static FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn { heading: "Product", links: &["Features", "Pricing", "API"] },
    FooterColumn { heading: "Company", links: &["About", "Blog", "Careers"] },
    FooterColumn { heading: "Resources", links: &["Documentation", "Support", "Status"] },
    FooterColumn { heading: "Legal", links: &["Privacy", "Terms", "Security"] },
];

pub static NAV_ANCHORS: [NavAnchor; 3] = [
    NavAnchor { label: "Features", href: "#features" },
    NavAnchor { label: "Statistics", href: "#statistics" },
    NavAnchor { label: "About", href: "#about" },
];

/// Testimonial text as it appears on its card.
pub fn quoted(text: &str) -> String {
    format!("\u{201c}{}\u{201d}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_keep_their_display_order() {
        let pairs: Vec<(&str, &str)> = STATS.iter().map(|s| (s.value, s.label)).collect();
        assert_eq!(
            pairs,
            vec![
                ("306", "Data Sources"),
                ("150+", "Countries"),
                ("250M+", "Records"),
                ("1.6M+", "Alerts"),
            ]
        );
    }

    #[test]
    fn leak_series_covers_first_half_year() {
        let months: Vec<&str> = LEAK_DATA.iter().map(|p| p.month).collect();
        let leaks: Vec<u32> = LEAK_DATA.iter().map(|p| p.leaks).collect();

        assert_eq!(months, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(leaks, vec![2400, 1398, 9800, 3908, 4800, 3800]);
    }

    #[test]
    fn testimonials_carry_attribution() {
        assert_eq!(TESTIMONIALS.len(), 2);
        assert_eq!(TESTIMONIALS[0].author, "Sarah Chen");
        assert_eq!(TESTIMONIALS[0].role, "CISO, TechCorp");
        assert_eq!(TESTIMONIALS[1].author, "Michael Rodriguez");
        assert_eq!(TESTIMONIALS[1].role, "Security Director, DataSafe");
        assert!(TESTIMONIALS.iter().all(|t| !t.text.is_empty()));
    }

    #[test]
    fn nav_anchors_point_at_page_sections() {
        let hrefs: Vec<&str> = NAV_ANCHORS.iter().map(|a| a.href).collect();
        assert_eq!(hrefs, vec!["#features", "#statistics", "#about"]);
    }

    #[test]
    fn footer_has_four_columns_of_three() {
        assert_eq!(FOOTER_COLUMNS.len(), 4);
        assert!(FOOTER_COLUMNS.iter().all(|c| c.links.len() == 3));
    }

    #[test]
    fn quoted_wraps_text() {
        assert_eq!(quoted("safe"), "\u{201c}safe\u{201d}");
    }
}
