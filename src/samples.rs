//! Preset messages for demos and smoke tests.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleEmail {
    pub id: &'static str,
    pub description: &'static str,
    pub subject: &'static str,
    pub body: &'static str,
}

const SAMPLES: &[SampleEmail] = &[
    SampleEmail {
        id: "phishing1",
        description: "Account suspension threat",
        subject: "Urgent: Your Account Will Be Suspended",
        body: "Dear Customer,\n\nYour account has been flagged for suspicious activity. To prevent suspension, please verify your account immediately by clicking the link below:\n\nhttp://secure-bank-verification.com/verify\n\nIf you don't verify within 24 hours, your account will be permanently suspended.\n\nThank you,\nBank Security Team",
    },
    SampleEmail {
        id: "phishing2",
        description: "Lottery prize scam",
        subject: "Congratulations! You've Won $10,000!",
        body: "Congratulations!\n\nYou have been selected as a winner in our international lottery. You've won $10,000 USD!\n\nTo claim your prize, please send us your:\n- Full name\n- Address\n- Phone number\n- Bank account details\n\nReply to this email immediately to claim your winnings!\n\nLottery Commission",
    },
    SampleEmail {
        id: "legitimate1",
        description: "Monthly bank statement notice",
        subject: "Your Monthly Statement is Ready",
        body: "Dear John Doe,\n\nYour monthly statement for Account #1234 is now available in your online banking portal.\n\nTo view your statement:\n1. Log in to your account at yourbank.com\n2. Navigate to Statements\n3. Select the current month\n\nFor questions, contact customer service at 1-800-YOURBANK.\n\nBest regards,\nYour Bank Customer Service",
    },
    SampleEmail {
        id: "legitimate2",
        description: "Team meeting reminder",
        subject: "Meeting Confirmation - Tomorrow 2PM",
        body: "Hi Team,\n\nThis is a reminder about our project meeting scheduled for tomorrow at 2:00 PM in Conference Room B.\n\nAgenda:\n- Project status updates\n- Q4 planning\n- Budget review\n\nPlease bring your project reports.\n\nThanks,\nSarah Johnson\nProject Manager",
    },
];

pub fn all() -> &'static [SampleEmail] {
    SAMPLES
}

pub fn get(id: &str) -> Option<&'static SampleEmail> {
    SAMPLES.iter().find(|sample| sample.id == id)
}
