pub mod state;

use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use state::{save_settings, use_settings, SettingsForm, TimeZone};
use thaw::*;

#[component]
fn SettingsSection(title: &'static str, icon_name: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="settings-section">
            <div class="settings-section__header">
                {icon(icon_name)}
                <h2 class="settings-section__title">{title}</h2>
            </div>
            <div class="settings-section__body">
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_settings();
    let form = SettingsForm::new(&ctx.settings.get_untracked());
    let (message, set_message) = signal::<Option<Result<String, String>>>(None);

    let save = move |_| match form.to_settings() {
        Ok(settings) => match save_settings(&settings) {
            Ok(()) => {
                log::info!("Settings saved");
                ctx.settings.set(settings);
                set_message.set(Some(Ok("Settings saved".to_string())));
            }
            Err(e) => {
                log::error!("{}", e);
                set_message.set(Some(Err(e)));
            }
        },
        Err(e) => set_message.set(Some(Err(e))),
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Settings"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=save>
                        {icon("save")}
                        " Save Settings"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || message.get().map(|m| match m {
                    Ok(text) => view! { <div class="alert alert--success">{text}</div> }.into_any(),
                    Err(text) => view! { <div class="alert alert--error">{text}</div> }.into_any(),
                })}

                <SettingsSection title="General" icon_name="settings">
                    <Flex vertical=true gap=FlexGap::Medium>
                        <div class="form__group">
                            <Label>"Site Name"</Label>
                            <Input value=form.site_name />
                        </div>
                        <div class="form__group">
                            <Label>"Time Zone"</Label>
                            <Select value=form.time_zone>
                                {TimeZone::ALL
                                    .into_iter()
                                    .map(|tz| view! { <option value=tz.as_str()>{tz.as_str()}</option> })
                                    .collect_view()}
                            </Select>
                        </div>
                    </Flex>
                </SettingsSection>

                <SettingsSection title="Notifications" icon_name="bell">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Checkbox checked=form.email_notifications label="Email notifications" />
                        <Checkbox checked=form.push_notifications label="Push notifications" />
                    </Flex>
                </SettingsSection>

                <SettingsSection title="Database" icon_name="database">
                    <Flex vertical=true gap=FlexGap::Medium>
                        <div class="form__group">
                            <Label>"Database URL"</Label>
                            <Input value=form.database_url placeholder="postgres://..." />
                        </div>
                        <div class="form__group">
                            <Label>"Max Connections"</Label>
                            <Input input_type=InputType::Number value=form.max_connections />
                        </div>
                        <div class="form__group">
                            <Label>"Timeout (ms)"</Label>
                            <Input input_type=InputType::Number value=form.timeout_ms />
                        </div>
                    </Flex>
                </SettingsSection>
            </div>
        </PageFrame>
    }
}
