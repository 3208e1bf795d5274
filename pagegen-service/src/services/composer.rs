//! Prompt composition.
//!
//! A composed prompt is the HTML-only preamble, the current system prompt, the
//! user-request separator, and the profile's page template for the topic.

use std::fmt;

/// Instructions prepended to every prompt so the model answers with a bare
/// HTML document.
pub const HTML_ONLY_PREAMBLE: &str = "Generate ONLY complete, functional HTML code. Do not include any explanations, comments, or text before/after the HTML. Start directly with <!DOCTYPE html> and end with </html>. No markdown formatting.\n\n";

/// Marks where the system prompt ends and the page request begins.
pub const USER_REQUEST_SEPARATOR: &str = "\n\n---USER REQUEST---\n";

const STANDARD_SYSTEM_PROMPT: &str = "You are a professional web developer. Your task is to generate complete, \
modern, and well-structured HTML for a web page based on the user's request. \
You must include the full HTML structure, including <!DOCTYPE html>, <html>, \
<head>, and <body> tags. Use Tailwind CSS for styling by including the \
official Tailwind CDN link in the <head> section. Always include clickable \
buttons and navigation links to other pages. Make sure all buttons are functional \
and lead to relevant pages.";

const SHOWCASE_SYSTEM_PROMPT: &str = "You are an elite UI/UX architect and full-stack developer specializing in cutting-edge web experiences. \
Create stunning, modern HTML pages that push the boundaries of web design. Your output must be:\
\n\nVISUAL EXCELLENCE:\
- Use advanced Tailwind CSS with custom animations, gradients, and glassmorphism effects\
- Implement dark/light mode toggle with smooth transitions\
- Add subtle parallax scrolling, hover animations, and micro-interactions\
- Use modern typography with variable fonts and perfect spacing\
- Include beautiful hero sections with animated backgrounds\
\n\nINTERACTIVE COMPONENTS:\
- Create responsive navigation with mobile hamburger menu\
- Add interactive cards, modals, and dropdown menus\
- Implement smooth scroll behavior and section transitions\
- Include loading animations and skeleton screens\
- Add interactive forms with real-time validation styling\
\n\nMODERN FEATURES:\
- Use CSS Grid and Flexbox for perfect layouts\
- Implement progressive disclosure and accordion components\
- Add search functionality with live filtering\
- Include social media integration and sharing buttons\
- Create interactive dashboards with charts and metrics\
\n\nRESPONSIVE DESIGN:\
- Mobile-first approach with perfect tablet and desktop scaling\
- Touch-friendly interactions and gesture support\
- Optimized performance with lazy loading\
\n\nAlways include complete HTML structure with <!DOCTYPE html>, proper meta tags, \
Tailwind CSS CDN, and ensure all interactive elements are functional. \
Make every page feel like a premium, modern web application.";

/// Wording of the system prompt default and the page template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptProfile {
    /// Clean, modern page with a fixed navigation bar.
    Standard,
    /// Feature-heavy showcase page.
    Showcase,
}

impl PromptProfile {
    pub fn default_system_prompt(&self) -> &'static str {
        match self {
            PromptProfile::Standard => STANDARD_SYSTEM_PROMPT,
            PromptProfile::Showcase => SHOWCASE_SYSTEM_PROMPT,
        }
    }

    /// The user-request part of the prompt for one page.
    pub fn page_request(&self, topic: &str) -> String {
        match self {
            PromptProfile::Standard => format!(
                "Generate the HTML for a page about '{topic}'. The page should have a clean and modern design.\n\
                 Make the content interesting and relevant to the topic. If it's a product, include a price and a buy button.\n\
                 If it's a blog post, make it informative.\n\
                 \n\
                 IMPORTANT: Include the following navigation elements:\n\
                 - A navigation bar with links to: /about, /products, /blog, /contact\n\
                 - A \"Change System Prompt\" button that links to /change-prompt\n\
                 - At least 3 clickable buttons that lead to different pages (be creative with the links)\n\
                 - Make sure all buttons and links are properly styled with Tailwind CSS\n\
                 - Include hover effects on all interactive elements\n\
                 \n\
                 The page should feel like a real website with functional navigation."
            ),
            PromptProfile::Showcase => format!(
                "CREATE AN EXCEPTIONAL '{upper}' PAGE:\n\
                 \n\
                 CONTENT REQUIREMENTS:\n\
                 - Generate rich, engaging content relevant to '{topic}'\n\
                 - Include interactive elements: counters, progress bars, live data displays\n\
                 - Add testimonials, reviews, or user-generated content sections\n\
                 - Implement search/filter functionality where applicable\n\
                 - Include call-to-action sections with conversion-optimized design\n\
                 \n\
                 MANDATORY UI COMPONENTS:\n\
                 - Stunning hero section with animated gradient background\n\
                 - Responsive navigation bar with smooth mobile hamburger menu\n\
                 - \"Change System Prompt\" button (styled as premium feature) linking to /change-prompt\n\
                 - Minimum 5 interactive buttons/cards leading to: /dashboard, /analytics, /settings, /profile, /explore\n\
                 - Floating action button (FAB) for quick actions\n\
                 - Breadcrumb navigation for better UX\n\
                 - Footer with social links and newsletter signup\n\
                 \n\
                 ADVANCED FEATURES TO IMPLEMENT:\n\
                 - Dark/light mode toggle with system preference detection\n\
                 - Loading skeletons and smooth page transitions\n\
                 - Interactive charts or data visualizations (using CSS/SVG)\n\
                 - Modal dialogs and toast notifications\n\
                 - Infinite scroll or pagination components\n\
                 - Real-time search with autocomplete suggestions\n\
                 - Drag-and-drop interfaces where relevant\n\
                 - Progressive web app features (offline indicators)\n\
                 \n\
                 VISUAL EXCELLENCE:\n\
                 - Glassmorphism cards with backdrop blur effects\n\
                 - Animated icons and micro-interactions\n\
                 - Custom CSS animations for scroll-triggered reveals\n\
                 - Beautiful color schemes with proper contrast ratios\n\
                 - Typography hierarchy with perfect spacing\n\
                 - Subtle shadows and depth for modern layering\n\
                 \n\
                 Make this the most impressive, modern experience possible!",
                upper = topic.to_uppercase(),
            ),
        }
    }

    /// Full outbound prompt. Deterministic in its inputs.
    pub fn compose(&self, system_prompt: &str, topic: &str) -> String {
        let page_request = self.page_request(topic);
        let mut prompt = String::with_capacity(
            HTML_ONLY_PREAMBLE.len()
                + system_prompt.len()
                + USER_REQUEST_SEPARATOR.len()
                + page_request.len(),
        );
        prompt.push_str(HTML_ONLY_PREAMBLE);
        prompt.push_str(system_prompt);
        prompt.push_str(USER_REQUEST_SEPARATOR);
        prompt.push_str(&page_request);
        prompt
    }
}

impl fmt::Display for PromptProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptProfile::Standard => write!(f, "standard"),
            PromptProfile::Showcase => write!(f, "showcase"),
        }
    }
}
