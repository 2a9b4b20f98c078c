use contracts::domain::a001_item::aggregate::PaymentInfo;
use leptos::prelude::*;

pub fn installments_banner(installments: i32) -> String {
    format!("¡Paga en hasta {} cuotas con 0% interés!", installments)
}

#[component]
pub fn PaymentInfoCard(info: PaymentInfo) -> impl IntoView {
    view! {
        <div class="payment-info">
            <h2 class="payment-info__title">"Medios de pago"</h2>
            <div class="payment-info__banner">{installments_banner(info.installments)}</div>
            {info
                .payment_methods
                .into_iter()
                .map(|method| {
                    let title = method.title;
                    let logos = method
                        .images
                        .into_iter()
                        .map(|src| {
                            view! { <img class="payment-group__logo" src=src alt=title.clone() /> }
                        })
                        .collect_view();
                    view! {
                        <div class="payment-group">
                            <h3 class="payment-group__title">{title.clone()}</h3>
                            <div class="payment-group__logos">{logos}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installments_banner() {
        assert_eq!(
            installments_banner(36),
            "¡Paga en hasta 36 cuotas con 0% interés!"
        );
    }
}
