//! Public landing page.

use crate::app_lib::theme::Theme;
use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;
use loan_core::routes::paths;

const STATS: [(&str, &str); 4] = [
    ("5,000+", "Students Funded"),
    ("12", "University Partners"),
    ("98%", "Completion Rate"),
    ("Le 2B+", "Disbursed"),
];

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "account_balance_wallet",
        "Flexible Payments",
        "Choose from multiple payment options including NASSIT pension deductions, bank transfers and mobile money.",
    ),
    (
        "visibility",
        "No Hidden Fees",
        "Transparent pricing with no surprise charges. Know exactly what you will pay before you sign.",
    ),
    (
        "school",
        "Direct University Payments",
        "We pay your university directly, ensuring your tuition is covered on time every semester.",
    ),
];

const STEPS: [(&str, &str); 4] = [
    (
        "Apply Online",
        "Complete our simple online application form with your personal, student and university details.",
    ),
    (
        "Get Approved",
        "Our team reviews your application and provides a quick decision, usually within 3-5 business days.",
    ),
    (
        "University Payment",
        "We disburse funds directly to your university to cover tuition and fees.",
    ),
    (
        "Flexible Repayment",
        "Make manageable monthly payments through automatic NASSIT deductions or your preferred method.",
    ),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "John Kamara",
        "Parent - Civil Servant",
        "Payfee made it possible for my daughter to start university on time. The salary deduction means I never miss a payment.",
    ),
    (
        "Amina Sesay",
        "Parent",
        "The application took less than an hour and the fees went straight to Njala University.",
    ),
    (
        "Ibrahim Conteh",
        "University Administrator",
        "Payments from Payfee arrive before the semester starts. It has made fee collection far easier for us.",
    ),
];

#[component]
pub fn WebsitePage() -> impl IntoView {
    view! {
        <AppShell>
            <section class="text-center py-12">
                <h1 class="text-4xl md:text-5xl font-extrabold text-gray-900 dark:text-white">
                    "Parents Fund, " <span class="text-blue-600">"Children Learn"</span>
                </h1>
                <p class="mt-6 max-w-2xl mx-auto text-lg text-gray-500 dark:text-gray-400">
                    "Empowering Sierra Leone's parents to finance their children's university education with flexible, affordable student loans."
                </p>
                <div class="mt-8 flex flex-col sm:flex-row justify-center gap-4">
                    <A
                        href=paths::REGISTER
                        {..}
                        class="inline-flex items-center justify-center px-6 py-3 text-base font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
                    >
                        "Apply Now"
                        <span class="material-symbols-outlined ml-2">"arrow_forward"</span>
                    </A>
                    <A
                        href=paths::LOGIN
                        {..}
                        class="inline-flex items-center justify-center px-6 py-3 text-base font-medium text-gray-900 bg-white border border-gray-300 rounded-lg hover:bg-gray-100 dark:bg-gray-800 dark:text-white dark:border-gray-600"
                    >
                        "Sign In"
                    </A>
                </div>
            </section>

            <section class="grid grid-cols-2 md:grid-cols-4 gap-4 py-8">
                {STATS
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <div class=format!("{} text-center", Theme::CARD)>
                                <p class="text-3xl font-bold text-blue-600">{value}</p>
                                <p class="text-sm text-gray-500 dark:text-gray-400">{label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="py-12">
                <h2 class="text-3xl font-bold text-center text-gray-900 dark:text-white">
                    "Why Parents Choose Payfee?"
                </h2>
                <p class="mt-2 text-center text-gray-500 dark:text-gray-400">
                    "Our platform makes education financing simple, transparent, and accessible."
                </p>
                <div class="mt-8 grid md:grid-cols-3 gap-6">
                    {FEATURES
                        .into_iter()
                        .map(|(icon, title, text)| {
                            view! {
                                <div class=format!("{} group", Theme::CARD)>
                                    <span class=format!("{} text-4xl", Theme::ICON)>{icon}</span>
                                    <h3 class="mt-4 text-xl font-semibold text-gray-900 dark:text-white">
                                        {title}
                                    </h3>
                                    <p class="mt-2 text-gray-500 dark:text-gray-400">{text}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="py-12">
                <h2 class="text-3xl font-bold text-center text-gray-900 dark:text-white">
                    "How It Works"
                </h2>
                <p class="mt-2 text-center text-gray-500 dark:text-gray-400">
                    "Getting started with Payfee is simple and straightforward for every parent."
                </p>
                <ol class="mt-8 grid md:grid-cols-4 gap-6">
                    {STEPS
                        .into_iter()
                        .enumerate()
                        .map(|(index, (title, text))| {
                            view! {
                                <li class=Theme::CARD>
                                    <span class="inline-flex items-center justify-center w-10 h-10 rounded-full bg-blue-600 text-white font-bold">
                                        {index + 1}
                                    </span>
                                    <h3 class="mt-4 font-semibold text-gray-900 dark:text-white">
                                        {title}
                                    </h3>
                                    <p class="mt-2 text-sm text-gray-500 dark:text-gray-400">{text}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
                <div class="mt-8 text-center">
                    <A
                        href=paths::REGISTER
                        {..}
                        class="inline-flex items-center px-6 py-3 text-base font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800"
                    >
                        "Start Your Application"
                    </A>
                </div>
            </section>

            <section class="py-12">
                <h2 class="text-3xl font-bold text-center text-gray-900 dark:text-white">
                    "What Our Users Say"
                </h2>
                <p class="mt-2 text-center text-gray-500 dark:text-gray-400">
                    "Hear from parents, including NASSIT pensioners, who have funded their children's studies with Payfee."
                </p>
                <div class="mt-8 grid md:grid-cols-3 gap-6">
                    {TESTIMONIALS
                        .into_iter()
                        .map(|(name, role, quote)| {
                            view! {
                                <figure class=Theme::CARD>
                                    <blockquote class="text-gray-600 dark:text-gray-300">
                                        {format!("\u{201c}{quote}\u{201d}")}
                                    </blockquote>
                                    <figcaption class="mt-4">
                                        <p class="font-semibold text-gray-900 dark:text-white">{name}</p>
                                        <p class="text-sm text-gray-500 dark:text-gray-400">{role}</p>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <footer class="border-t border-gray-200 dark:border-gray-800 py-8 grid md:grid-cols-3 gap-6 text-sm text-gray-500 dark:text-gray-400">
                <div>
                    <p class="font-bold text-gray-900 dark:text-white">"Payfee"</p>
                    <p class="mt-2">"Education financing for Sierra Leonean families."</p>
                </div>
                <div>
                    <p class="font-semibold text-gray-900 dark:text-white">"Quick Links"</p>
                    <ul class="mt-2 space-y-1">
                        <li>
                            <A href=paths::REGISTER {..} class=Theme::LINK>
                                "Apply"
                            </A>
                        </li>
                        <li>
                            <A href=paths::LOGIN {..} class=Theme::LINK>
                                "Sign In"
                            </A>
                        </li>
                    </ul>
                </div>
                <div>
                    <p class="font-semibold text-gray-900 dark:text-white">"Contact Us"</p>
                    <p class="mt-2">"25 Siaka Stevens St, Freetown"</p>
                    <p>"Sierra Leone"</p>
                    <p>"Email: info@payfee.sl"</p>
                    <p>"Phone: +232 76 123 4567"</p>
                </div>
            </footer>
        </AppShell>
    }
}
