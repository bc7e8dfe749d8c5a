//! Built-in sample documents used by `--create-samples`.
//!
//! Files whose name matches a sample keep its source and category labels
//! when they are processed.

#[derive(Debug, Clone, Copy)]
pub struct SampleDocument {
    pub filename: &'static str,
    pub content: &'static str,
    pub source: &'static str,
    pub category: &'static str,
}

/// Find the sample document with the given filename.
pub fn find_sample(filename: &str) -> Option<&'static SampleDocument> {
    SAMPLE_DOCUMENTS.iter().find(|doc| doc.filename == filename)
}

pub const SAMPLE_DOCUMENTS: &[SampleDocument] = &[
    SampleDocument {
        filename: "password-reset.txt",
        content: "How to Reset Your Password

If you've forgotten your password, you can reset it by following these steps:

1. Go to the login page
2. Click on \"Forgot Password\" link
3. Enter your email address
4. Check your email for reset instructions
5. Click the reset link in the email
6. Create a new strong password
7. Log in with your new password

Password Requirements:
- At least 8 characters long
- Include uppercase and lowercase letters
- Include at least one number
- Include at least one special character (!@#$%^&*)

If you continue to have trouble, contact our support team at support@company.com",
        source: "Password Reset FAQ",
        category: "account-management",
    },
    SampleDocument {
        filename: "subscription-cancellation.txt",
        content: "How to Cancel Your Subscription

You can cancel your subscription at any time by following these steps:

1. Log into your account
2. Go to Account Settings
3. Click on \"Subscription\" tab
4. Click \"Cancel Subscription\"
5. Confirm your cancellation
6. You'll receive a confirmation email

Important Notes:
- Your subscription will remain active until the end of your current billing period
- You can reactivate your subscription at any time before it expires
- Refunds are available within 30 days of purchase
- Contact billing@company.com for refund requests

After cancellation, you'll still have access to:
- Downloaded content
- Account history
- Ability to reactivate",
        source: "Billing FAQ",
        category: "billing",
    },
    SampleDocument {
        filename: "performance-troubleshooting.txt",
        content: "Application Performance Troubleshooting

If your application is running slowly, try these troubleshooting steps:

Common Causes:
- Poor internet connection
- Browser cache issues
- Too many browser tabs open
- Outdated browser version
- System resources running low

Quick Fixes:
1. Refresh the page (Ctrl+F5 or Cmd+Shift+R)
2. Clear your browser cache and cookies
3. Close unnecessary browser tabs
4. Update your browser to the latest version
5. Restart your browser
6. Check your internet connection speed

Advanced Solutions:
- Disable browser extensions temporarily
- Try using an incognito/private browsing window
- Check for system updates
- Free up disk space
- Restart your computer

If problems persist after trying these steps, please contact technical support with:
- Your browser version
- Operating system
- Description of the performance issue
- Screenshot if applicable",
        source: "Technical Support FAQ",
        category: "technical",
    },
];
