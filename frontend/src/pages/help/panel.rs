use super::{
    utils::FAQ,
    view_model::{use_help_view_model, HelpViewModel},
};
use crate::{
    components::{
        error::InlineErrorMessage,
        layout::{PublicLayout, SuccessMessage},
    },
    state::{session::LOGIN_PATH, use_session},
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn HelpPage() -> impl IntoView {
    let signed_in = use_session().has_token();
    view! {
        <Title text="Help | CAPE"/>
        <PublicLayout>
            <section class="text-center space-y-4 mb-10">
                <h1 class="text-4xl font-bold tracking-tight">"Need Help?"</h1>
                <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                    "Our team of professionals is here to help you with any questions or concerns you may have about our expense tracking service."
                </p>
            </section>
            <section class="grid md:grid-cols-2 gap-8">
                <div class="bg-white border rounded-lg p-6 space-y-4">
                    <h2 class="text-xl font-semibold">"Professional Support"</h2>
                    {FAQ.iter().map(|(question, answer)| view! {
                        <div class="space-y-1">
                            <h3 class="font-semibold">{*question}</h3>
                            <p class="text-sm text-gray-600">{*answer}</p>
                        </div>
                    }).collect_view()}
                </div>
                <div class="bg-white border rounded-lg p-6">
                    <h2 class="text-xl font-semibold mb-4">"Contact Us"</h2>
                    {if signed_in {
                        view! { <ContactForm vm=use_help_view_model() /> }.into_view()
                    } else {
                        view! {
                            <p class="text-sm text-gray-600">
                                <a href=LOGIN_PATH class="text-emerald-700 underline">"Log in"</a>
                                " to send a message to our support team."
                            </p>
                        }
                        .into_view()
                    }}
                </div>
            </section>
        </PublicLayout>
    }
}

#[component]
fn ContactForm(vm: HelpViewModel) -> impl IntoView {
    let busy = vm.send_action.pending();
    view! {
        <form
            class="space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit();
            }
        >
            <InlineErrorMessage error=vm.error />
            {move || vm.notice.get().map(|message| view! { <SuccessMessage message=message /> })}
            <div class="space-y-1">
                <label class="block text-sm font-medium" for="subject">"Subject"</label>
                <input
                    id="subject"
                    class="w-full border rounded px-3 py-2"
                    prop:value=move || vm.form.get().subject
                    on:input=move |ev| vm.form.update(|f| f.subject = event_target_value(&ev))
                />
            </div>
            <div class="space-y-1">
                <label class="block text-sm font-medium" for="message">"Message"</label>
                <textarea
                    id="message"
                    rows="5"
                    class="w-full border rounded px-3 py-2"
                    prop:value=move || vm.form.get().message
                    on:input=move |ev| vm.form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
            </div>
            <button
                type="submit"
                class="w-full py-2 rounded bg-emerald-600 text-white"
                disabled=move || busy.get()
            >
                {move || if busy.get() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}
