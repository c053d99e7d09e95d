use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdCircleCheck, LdClock, LdDollarSign, LdDownload, LdEye, LdLeaf, LdMapPin, LdPackage,
    LdSearch, LdShield, LdUser,
};
use dioxus_free_icons::Icon;
use shared_types::IconName;

/// Render the lucide glyph for a symbolic icon name at `size` pixels.
#[component]
pub fn Glyph(name: IconName, #[props(default = 16)] size: u32) -> Element {
    match name {
        IconName::MapPin => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: size, height: size } },
        IconName::DollarSign => rsx! { Icon::<LdDollarSign> { icon: LdDollarSign, width: size, height: size } },
        IconName::Package => rsx! { Icon::<LdPackage> { icon: LdPackage, width: size, height: size } },
        IconName::Shield => rsx! { Icon::<LdShield> { icon: LdShield, width: size, height: size } },
        IconName::Leaf => rsx! { Icon::<LdLeaf> { icon: LdLeaf, width: size, height: size } },
        IconName::Search => rsx! { Icon::<LdSearch> { icon: LdSearch, width: size, height: size } },
        IconName::Bell => rsx! { Icon::<LdBell> { icon: LdBell, width: size, height: size } },
        IconName::User => rsx! { Icon::<LdUser> { icon: LdUser, width: size, height: size } },
        IconName::Eye => rsx! { Icon::<LdEye> { icon: LdEye, width: size, height: size } },
        IconName::Download => rsx! { Icon::<LdDownload> { icon: LdDownload, width: size, height: size } },
        IconName::CheckCircle => rsx! { Icon::<LdCircleCheck> { icon: LdCircleCheck, width: size, height: size } },
        IconName::Clock => rsx! { Icon::<LdClock> { icon: LdClock, width: size, height: size } },
    }
}
